use crate::config::Settings;
use crate::seeder::types::EventIdentity;
use crate::seeder::{
    Dispatcher, EventBuilder, ExtensionMap, Payload, Scheduler, SeederConfig, TracingReporter,
};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Main application struct that wires all components together
pub struct Application {
    settings: Settings,
    scheduler: Scheduler,
    shutdown_tx: mpsc::Sender<()>,
}

impl Application {
    /// Load settings and assemble the component stack.
    ///
    /// Any failure here (malformed settings, unparseable target) is fatal.
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;
        let config = SeederConfig::from_settings(&settings)?;
        info!("Configuration loaded successfully");

        let transport = Arc::new(HttpTransport::new(
            &config.target,
            settings.request_timeout(),
        )?);
        let reporter = Arc::new(TracingReporter);

        // One-time startup work: parse extensions, generate the payload
        let extensions = ExtensionMap::parse(&config.extensions_spec);
        let payload = Payload::generate(config.payload_size);
        info!(
            "Seeding target {:?} with {} extension(s) and a {} byte payload",
            config.target,
            extensions.len(),
            payload.len()
        );

        let builder = EventBuilder::new(EventIdentity::default(), extensions, payload);
        let dispatcher = Dispatcher::new(transport, reporter, &config);
        let (scheduler, shutdown_tx) = Scheduler::new(builder, dispatcher, config.interval);

        Ok(Self {
            settings,
            scheduler,
            shutdown_tx,
        })
    }

    /// Run the tick loop until Ctrl-C.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let shutdown_tx = self.shutdown_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupt received, requesting shutdown");
                let _ = shutdown_tx.send(()).await;
            }
        });

        self.scheduler.run().await;
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
