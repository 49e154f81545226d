use common::{BoardSnapshot, Direction, GameStatus, Point};
use eframe::egui;

use crate::colors;
use crate::config::ClientConfig;
use crate::input::{InputTracker, direction_for_key};
use crate::state::{ClientCommand, CommandSender, GameCommand, MenuCommand};

const ARROW_KEYS: [egui::Key; 4] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
];

// Head and food marks, in 20ths of the cell size. Matches a 20 px cell
// with 3 px eyes, a 3 px mouth and an 8 px food radius.
const MARK_RADIUS: f32 = 3.0;
const FOOD_RADIUS: f32 = 8.0;
const REFERENCE_CELL: f32 = 20.0;

pub fn render_game(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    snapshot: &Option<BoardSnapshot>,
    config: &ClientConfig,
    input: &mut InputTracker,
    commands: &CommandSender,
) {
    let Some(snapshot) = snapshot else {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    };

    handle_input(ctx, snapshot, input, commands);

    ui.vertical_centered(|ui| {
        ui.heading(format!("Score: {}", snapshot.score));
        ui.add_space(8.0);

        draw_board(ui, snapshot, config);

        ui.add_space(8.0);
        match snapshot.status {
            GameStatus::Over => {
                ui.label(
                    egui::RichText::new("Game Over!")
                        .color(egui::Color32::RED)
                        .size(24.0),
                );
                if ui.button("Restart (Enter)").clicked() {
                    input.reset();
                    commands.send(ClientCommand::Game(GameCommand::Restart));
                }
            }
            GameStatus::Won => {
                ui.label(
                    egui::RichText::new("You Win!")
                        .color(egui::Color32::GREEN)
                        .size(24.0),
                );
                if ui.button("Restart (Enter)").clicked() {
                    input.reset();
                    commands.send(ClientCommand::Game(GameCommand::Restart));
                }
            }
            GameStatus::Paused => {
                ui.label("Paused");
            }
            GameStatus::Running => {
                ui.label("Arrow keys to steer, Space to pause");
            }
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 80.0);
            if !snapshot.status.is_terminal() {
                let pause_label = if snapshot.is_paused() {
                    "Continue"
                } else {
                    "Pause"
                };
                if ui.button(pause_label).clicked() {
                    commands.send(ClientCommand::Game(GameCommand::TogglePause));
                }
            }
            if ui.button("Go Home (Escape)").clicked() {
                commands.send(ClientCommand::Menu(MenuCommand::GoHome));
            }
        });
    });
}

fn handle_input(
    ctx: &egui::Context,
    snapshot: &BoardSnapshot,
    input: &mut InputTracker,
    commands: &CommandSender,
) {
    let pressed = ctx.input(|i| {
        ARROW_KEYS
            .into_iter()
            .find(|key| i.key_pressed(*key))
            .and_then(direction_for_key)
    });

    if snapshot.status == GameStatus::Running
        && let Some(pressed) = pressed
        && let Some(direction) = input.accept(pressed, snapshot.direction)
    {
        commands.send(ClientCommand::Game(GameCommand::Turn(direction)));
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Space)) && !snapshot.status.is_terminal() {
        commands.send(ClientCommand::Game(GameCommand::TogglePause));
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) && snapshot.status.is_terminal() {
        input.reset();
        commands.send(ClientCommand::Game(GameCommand::Restart));
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        commands.send(ClientCommand::Menu(MenuCommand::GoHome));
    }
}

fn draw_board(ui: &mut egui::Ui, snapshot: &BoardSnapshot, config: &ClientConfig) {
    let cell = config.cell_size as f32;
    let canvas = egui::vec2(
        snapshot.grid.width as f32 * cell,
        snapshot.grid.height as f32 * cell,
    );
    let (response, painter) = ui.allocate_painter(canvas, egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, colors::BOARD_BACKGROUND);

    let snake_color = colors::snake_color(&config.color);
    for (i, segment) in snapshot.body.iter().enumerate() {
        let rect = cell_rect(origin, *segment, cell);
        painter.rect_filled(rect, 0.0, snake_color);

        if i == 0 {
            draw_head_marks(&painter, rect, snapshot.direction);
        } else {
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::WHITE),
                egui::StrokeKind::Inside,
            );
        }
    }

    if let Some(food) = snapshot.food {
        let scale = cell / REFERENCE_CELL;
        painter.circle_filled(
            cell_rect(origin, food, cell).center(),
            FOOD_RADIUS * scale,
            egui::Color32::RED,
        );
    }
}

/// Two eye dots on the side the head faces and a mouth dot on its
/// leading edge, one fixed layout per compass direction.
fn draw_head_marks(painter: &egui::Painter, head: egui::Rect, direction: Direction) {
    let scale = head.width() / REFERENCE_CELL;

    for (dx, dy) in eye_offsets(direction) {
        painter.circle_filled(
            egui::pos2(head.min.x + dx * scale, head.min.y + dy * scale),
            MARK_RADIUS * scale,
            egui::Color32::WHITE,
        );
    }

    let (dx, dy) = mouth_offset(direction);
    painter.circle_filled(
        egui::pos2(head.min.x + dx * scale, head.min.y + dy * scale),
        MARK_RADIUS * scale,
        egui::Color32::BLACK,
    );
}

fn cell_rect(origin: egui::Pos2, cell: Point, size: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * size,
            origin.y + cell.y as f32 * size,
        ),
        egui::vec2(size, size),
    )
}

fn eye_offsets(direction: Direction) -> [(f32, f32); 2] {
    match direction {
        Direction::Up => [(6.0, 6.0), (14.0, 6.0)],
        Direction::Down => [(6.0, 14.0), (14.0, 14.0)],
        Direction::Left => [(6.0, 6.0), (6.0, 14.0)],
        Direction::Right => [(14.0, 6.0), (14.0, 14.0)],
    }
}

fn mouth_offset(direction: Direction) -> (f32, f32) {
    match direction {
        Direction::Up => (10.0, 2.0),
        Direction::Down => (10.0, 18.0),
        Direction::Left => (2.0, 10.0),
        Direction::Right => (18.0, 10.0),
    }
}
