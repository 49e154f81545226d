use eframe::egui;

use crate::colors;
use crate::config::ClientConfig;

const LEVEL_CHOICES: [(u32, &str); 4] = [
    (1, "Easy"),
    (2, "Medium"),
    (3, "Hard"),
    (4, "Very Hard"),
];

/// Pre-game configuration screen. Returns true when the player hits
/// Start; the chosen color and level ride along in `config`.
pub fn render_home(ui: &mut egui::Ui, config: &mut ClientConfig) -> bool {
    let mut start = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("Welcome to Snake Arcade");
        ui.add_space(30.0);

        ui.label("Snake color:");
        let color = colors::snake_color(&config.color);
        let mut rgb = [color.r(), color.g(), color.b()];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            config.color =
                colors::format_hex_color(egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]));
        }

        ui.add_space(15.0);
        ui.label("Difficulty:");
        let selected = LEVEL_CHOICES
            .iter()
            .find(|(level, _)| *level == config.level)
            .map(|(_, name)| *name)
            .unwrap_or("Custom");
        egui::ComboBox::from_id_salt("level_select")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for (level, name) in LEVEL_CHOICES {
                    ui.selectable_value(&mut config.level, level, name);
                }
            });

        ui.add_space(30.0);
        if ui.button("Start Game").clicked() {
            start = true;
        }
    });

    start
}
