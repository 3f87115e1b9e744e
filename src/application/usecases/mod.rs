pub mod explain_dockerfile;
pub mod generate_dockerfile;
pub mod inspect_config;
