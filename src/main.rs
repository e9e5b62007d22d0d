//! POI Route Planner.
//!
//! Desktop-Karte zum Speichern von Orten und Berechnen von Routen dorthin.

use eframe::egui;
use poi_route_planner::services::{
    FixedGeolocator, MapScene, NominatimResolver, OsrmRouteEngine,
};
use poi_route_planner::{
    intent_channel, ui, AppIntent, FileKeyValueStore, IntentReceiver, MapController, MapSession,
    PlannerOptions, SceneMapView, Services,
};
use std::sync::{Arc, Mutex, PoisonError};

const APP_TITLE: &str = "POI Route Planner";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("POI Route Planner v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title(APP_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            APP_TITLE,
            options,
            Box::new(|cc| Ok(Box::new(PlannerApp::new(cc.egui_ctx.clone())?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlannerApp {
    session: MapSession,
    controller: MapController,
    receiver: IntentReceiver,
    scene: Arc<Mutex<MapScene>>,
    canvas: ui::MapCanvas,
}

impl PlannerApp {
    fn new(ctx: egui::Context) -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PlannerOptions::config_path();
        let options = PlannerOptions::load_from_file(&config_path);

        let backend = FileKeyValueStore::open(options.data_dir_path())?;
        let (sender, receiver) = intent_channel();
        let map_view = SceneMapView::new();
        let scene = map_view.scene();

        let services = Services {
            prompt: Box::new(ui::RfdPrompt::new(APP_TITLE)),
            map_view: Box::new(map_view),
            names: Box::new(NominatimResolver::new(
                &options.nominatim_base_url,
                &options.http_user_agent,
                options.http_timeout(),
                &options.fallback_place_label,
                repainting(sender.clone(), ctx.clone()),
            )?),
            routes: Box::new(OsrmRouteEngine::new(
                &options.osrm_base_url,
                &options.http_user_agent,
                options.http_timeout(),
                repainting(sender.clone(), ctx),
            )?),
            geolocator: Box::new(FixedGeolocator::new(options.home_position, sender.clone())),
        };

        let canvas = ui::MapCanvas::new(&options);
        let session = MapSession::new(options, Box::new(backend));

        // Startup über denselben Kanal wie alle Dienst-Abschlüsse
        if sender.send(AppIntent::StartupRequested).is_err() {
            log::error!("Startup-Intent konnte nicht eingereiht werden");
        }

        Ok(Self {
            session,
            controller: MapController::new(services),
            receiver,
            scene,
            canvas,
        })
    }
}

/// Wrappt den Sender, damit eintreffende Worker-Ergebnisse ein Neuzeichnen auslösen.
fn repainting(
    sender: poi_route_planner::IntentSender,
    ctx: egui::Context,
) -> poi_route_planner::IntentSender {
    let (forward_tx, forward_rx) = intent_channel();
    std::thread::spawn(move || {
        for intent in forward_rx {
            if sender.send(intent).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
    forward_tx
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.controller.drain(&mut self.session, &self.receiver) {
            log::error!("Event handling failed: {:#}", e);
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl PlannerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.session, self.canvas.camera());
        events.extend(ui::render_marker_list(ctx, &self.session));
        events.extend(ui::render_route_panel(ctx, &self.session));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut scene = self.scene.lock().unwrap_or_else(PoisonError::into_inner);
                events.extend(self.canvas.show(ui, &mut scene, &self.session));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.session, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
