#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Crack(#[from] pincrack::Error),

    #[error("Exactly one of --hash or --password is required")]
    InvalidArgs,

    #[error("Invalid value '{value}' for {name}: expected a positive integer")]
    InvalidEnv { name: &'static str, value: String },
}
