use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
