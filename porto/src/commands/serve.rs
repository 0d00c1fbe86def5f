use porto_config::Config;
use porto_core_contact_impl::ContactServiceImpl;
use tracing::info;

use crate::{
    email,
    environment::{self, RestServer},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!(
        "Relaying contact form messages to {} via {}:{}",
        config.contact.recipient, config.smtp.host, config.smtp.port
    );
    let email = email::connect(&config.smtp)?;
    let contact = ContactServiceImpl::new(email, environment::contact_service_config(&config));

    let server = RestServer::new(contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
