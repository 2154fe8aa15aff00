// Adapters layer: concrete clients for the upstream MVNO provider APIs.

pub mod rest;
pub mod soap;

pub use rest::MvnoRestClient;
pub use soap::MvnoSoapClient;
