use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{configuration::Settings, routes::*, spreadsheet_client::SpreadsheetClient};

fn run(listener: TcpListener, spreadsheet_client: SpreadsheetClient) -> Result<Server, anyhow::Error> {
    let spreadsheet_client = web::Data::new(spreadsheet_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/", web::post().to(sign_up))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/submit")
                    .app_data(submit_json_config())
                    .route(web::post().to(submit))
                    .default_service(web::route().to(submit_method_not_allowed)),
            )
            .app_data(spreadsheet_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Application, anyhow::Error> {
        let spreadsheet_client = SpreadsheetClient::new(
            configuration.spreadsheet.endpoint()?,
            configuration.spreadsheet.timeout(),
        );

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))?;
        let port = listener.local_addr()?.port();
        tracing::info!(port, "Listening for sign-ups");
        Ok(Application {
            server: run(listener, spreadsheet_client)?,
            port,
        })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
