use {
    anyhow::Context as _,
    eframe::{
        Frame,
        egui::{
            Align, Button, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel,
            Ui, Visuals,
        },
    },
};

use crate::{
    Cli,
    analysis::build_series,
    app::{CompletionStatus, RenderPhase, Session},
    config::PLOT_CONFIG,
    data::{BackendClient, RequestDispatcher},
    domain::Ticker,
    ui::{
        TickerInputState, UI_CONFIG, UI_TEXT, UiStyleExt, error_frame, render_chart,
        render_dashboard, render_disclaimer, render_empty, render_loading,
    },
    utils::TimeUtils,
};

pub struct App {
    session: Session,
    // None only if the HTTP client or runtime failed to start
    dispatcher: Option<RequestDispatcher<BackendClient>>,
    input: TickerInputState,
    startup_error: Option<String>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let (dispatcher, startup_error) = match start_client(&args.backend_url, &cc.egui_ctx) {
            Ok(dispatcher) => {
                log::info!("Analysis backend: {}", dispatcher.provider().base_url());
                (Some(dispatcher), None)
            }
            Err(e) => {
                log::error!("Failed to start analysis client: {:#}", e);
                (None, Some(format!("{}: {:#}", UI_TEXT.error_startup, e)))
            }
        };

        let mut app = Self {
            session: Session::default(),
            dispatcher,
            input: TickerInputState::with_text(args.ticker.clone().unwrap_or_default()),
            startup_error,
        };

        if let Some(ticker) = args.ticker.as_deref().and_then(Ticker::parse) {
            app.start_analysis(ticker);
        }
        app
    }

    fn start_analysis(&mut self, ticker: Ticker) {
        let Some(dispatcher) = &self.dispatcher else {
            log::warn!("No analysis client; ignoring request for {}", ticker);
            return;
        };
        if let Some(request_id) = self.session.submit(ticker.clone()) {
            dispatcher.dispatch(request_id, ticker);
        }
    }

    /// Applies every finished request. Chart noise is drawn once per result.
    fn poll_completions(&mut self) {
        let Some(dispatcher) = &self.dispatcher else {
            return;
        };
        let completions = dispatcher.drain();
        if completions.is_empty() {
            return;
        }

        let today = TimeUtils::today_local();
        let mut rng = rand::rng();
        for completion in completions {
            let request_id = completion.request_id;
            let status = self
                .session
                .complete(completion, |result| build_series(result, today, &mut rng));
            if status == CompletionStatus::Stale {
                log::debug!("Request #{} arrived after it was superseded", request_id);
            }
        }
    }

    fn render_body(&mut self, ui: &mut Ui) {
        let is_loading = self.session.is_loading();
        let client_ready = self.dispatcher.is_some();
        if let Some(ticker) = self.input.show(ui, is_loading, client_ready) {
            self.start_analysis(ticker);
        }
        ui.add_space(UI_CONFIG.card_spacing);

        if let Some(message) = &self.startup_error {
            render_error_banner(ui, message);
            ui.add_space(UI_CONFIG.card_spacing);
        }
        if let Some(message) = self.session.error() {
            if render_error_banner(ui, message) {
                self.session.dismiss_error();
            }
            ui.add_space(UI_CONFIG.card_spacing);
        }

        match self.session.phase() {
            RenderPhase::Empty => render_empty(ui),
            RenderPhase::Loading => render_loading(ui, self.session.pending_ticker()),
            RenderPhase::Ready => {
                if let Some(view) = self.session.view() {
                    render_chart(
                        ui,
                        &view.series,
                        view.result.current_price,
                        &view.result.forecast,
                    );
                    ui.add_space(UI_CONFIG.card_spacing);
                    render_dashboard(ui, &view.result);
                }
            }
        }

        ui.add_space(UI_CONFIG.card_spacing);
        render_disclaimer(ui);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_completions();

        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.app_title.as_str())
                            .size(28.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(UI_TEXT.app_subtitle.as_str());
                });
            });

        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| ui.label_subdued(UI_TEXT.footer.as_str()));
            });

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.max_content_width);
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                self.render_body(ui);
                            });
                        });
                    });
            });
    }
}

fn start_client(
    backend_url: &str,
    ctx: &Context,
) -> anyhow::Result<RequestDispatcher<BackendClient>> {
    let client = BackendClient::new(backend_url)
        .with_context(|| format!("HTTP client for {}", backend_url))?;
    let dispatcher =
        RequestDispatcher::new(client, Some(ctx.clone())).context("request runtime")?;
    Ok(dispatcher)
}

/// Returns true when the user dismissed the banner.
fn render_error_banner(ui: &mut Ui, message: &str) -> bool {
    let mut dismissed = false;
    error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new("Error:")
                    .strong()
                    .color(PLOT_CONFIG.color_error_fg),
            );
            ui.label(RichText::new(message).color(PLOT_CONFIG.color_error_fg));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add(Button::new(UI_TEXT.icon_close.as_str()).frame(false))
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });
    });
    dismissed
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
