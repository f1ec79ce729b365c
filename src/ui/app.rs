//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameOutcome, GameState};
use super::theme::*;
use crate::{GameConfig, GameMode, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    /// Create the app for a validated configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Human Black)").clicked() {
                        self.state.restart_with_mode(GameMode::HumanVsAi {
                            human_color: Stone::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Human White)").clicked() {
                        self.state.restart_with_mode(GameMode::HumanVsAi {
                            human_color: Stone::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI vs AI)").clicked() {
                        self.state.restart_with_mode(GameMode::AiVsAi);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.players_text());
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_rules_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(self.state.players_text()).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Stone::Black;
            let (fill, outline) = if is_black {
                (BLACK_STONE, BLACK_STONE_HIGHLIGHT)
            } else {
                (WHITE_STONE, WHITE_STONE_SHADOW)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter()
                    .circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, outline));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(self.state.status_text())
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (text, color) = if self.state.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (
                            format!("AI thinking... {:.1}s", elapsed.as_secs_f32()),
                            STATUS_THINKING,
                        )
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), STATUS_READY)
                    } else {
                        ("AI to move".to_string(), STATUS_THINKING)
                    };
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_rules_card(&self, ui: &mut egui::Ui) {
        let config = &self.state.config;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RULES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "{0}x{0} board, {1} in a row",
                    config.board_size, config.win_length
                ))
                .size(12.0)
                .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("Search depth {}", config.depth))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{} / depth {}", result.strategy, result.depth))
                            .size(11.0)
                            .strong()
                            .color(STATUS_READY),
                    );
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{}ms", result.time_ms))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!("{} nodes", result.nodes))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    });
                });
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> {pos}"))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        let headline = match outcome {
            GameOutcome::Win { winner, .. } => format!("{} WINS!", winner.name().to_uppercase()),
            GameOutcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui
                        .button(RichText::new("Play again").size(14.0).strong())
                        .clicked()
                    {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.state.is_human_turn()
                && !self.state.is_over()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                self.state.winning_line(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    tracing::debug!(%err, "rejected click");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Keyboard shortcuts: D toggles the AI panel, N restarts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, restart) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if restart {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.ai_due() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the engine is due or busy
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.is_ai_turn() {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }
    }
}
