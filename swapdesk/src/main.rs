use std::sync::Arc;

use swapdesk::app::App;
use swapdesk::core::config::SwapTimings;
use swapdesk::services::api::ApiClient;
use swapdesk::ui;
use swapdesk::ui::theme::Theme;
use swapdesk::utils::runtime::TOKIO_RT;

/// eframe shell around the application orchestrator.
struct SwapdeskApp {
    app: App,
}

impl eframe::App for SwapdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply async task results before rendering
        self.app.on_tick();

        ui::render(ctx, &mut self.app);

        // Keep polling for task results while idle
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    swapdesk::debug::init();

    // Handlers spawn onto tokio; enter the runtime before the GUI loop.
    let _enter = TOKIO_RT.enter();

    let app = App::new(Arc::new(ApiClient::new()), SwapTimings::default());
    app.load_catalog();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 680.0])
            .with_min_inner_size([400.0, 560.0])
            .with_title("Swapdesk"),
        ..Default::default()
    };

    tracing::info!("Starting swapdesk");

    eframe::run_native(
        "swapdesk",
        options,
        Box::new(move |cc| {
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(SwapdeskApp { app }))
        }),
    )
}
