use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeclsyncError {
    #[error("Type not found in model: {type_name}")]
    TypeNotFound { type_name: String },

    #[error("Base type not found in model: {base} (declared on {class})")]
    BaseNotFound { base: String, class: String },

    #[error("Interface not found in model: {interface} (declared on {class})")]
    InterfaceNotFound { interface: String, class: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DeclsyncError>;

impl DeclsyncError {
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        DeclsyncError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    pub fn base_not_found(base: impl Into<String>, class: impl Into<String>) -> Self {
        DeclsyncError::BaseNotFound {
            base: base.into(),
            class: class.into(),
        }
    }

    pub fn interface_not_found(interface: impl Into<String>, class: impl Into<String>) -> Self {
        DeclsyncError::InterfaceNotFound {
            interface: interface.into(),
            class: class.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DeclsyncError::Config(message.into())
    }
}
