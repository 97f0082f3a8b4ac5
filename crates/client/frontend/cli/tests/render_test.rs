use std::io::Write;

use maze_frontend_core::config::RenderMode;
use maze_frontend_core::{FrontendConfig, GameController, LayoutConfig};
use maze_frontend_cli::presentation::{RatatuiTheme, RenderContext, ui};
use maze_sandbox::GameFileLoader;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

const GAME: &str = r########"(
    levels: [
        (rows: ["#####", "#PA$D", "#####"]),
    ],
)"########;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(mode: RenderMode, keys: &str) -> (Buffer, ui::UiLayout) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(GAME.as_bytes()).unwrap();

    let config = FrontendConfig {
        game_file: file.path().to_path_buf(),
        render_mode: mode,
        layout: LayoutConfig {
            maze_width: 20,
            maze_height: 6,
            inventory_width: 24,
            stats_height: 2,
        },
    };
    let mut controller = GameController::new(GameFileLoader, RatatuiTheme::new(), &config).unwrap();
    controller.play();
    for key in keys.chars() {
        controller.handle_key(key);
    }

    let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
    let ctx = RenderContext {
        interface: controller.interface(),
        controls_height: 3,
    };
    let layout = ui::draw(&mut terminal, &ctx).unwrap();
    (terminal.backend().buffer().clone(), layout)
}

#[test]
fn frame_shows_every_panel() {
    let (buffer, _) = render(RenderMode::Shapes, "");
    let text = buffer_text(&buffer);

    for expected in ["MazeRunner", "File", "Inventory", "HP", "Hunger", "Thirst", "Coins"] {
        assert!(text.contains(expected), "missing {expected:?} in\n{text}");
    }
    for expected in ["Restart game", "New game", "Timer: 0m 0s"] {
        assert!(text.contains(expected), "missing {expected:?} in\n{text}");
    }
}

#[test]
fn shapes_mode_annotates_entities() {
    let (buffer, layout) = render(RenderMode::Shapes, "");
    let canvas = layout.level_canvas();

    // 3x5 maze over 20x6 cells: 4x2 cells each, player at row 1 col 1.
    let (x, y) = (canvas.x + 4 + 2, canvas.y + 2 + 1);
    assert_eq!(buffer[(x, y)].symbol(), "P");
    assert_eq!(buffer[(x, y)].bg, Color::Blue);
}

#[test]
fn images_mode_tiles_sprites() {
    let (buffer, layout) = render(RenderMode::Images, "");
    let canvas = layout.level_canvas();

    for dx in 0..4 {
        assert_eq!(buffer[(canvas.x + 4 + dx, canvas.y + 2)].symbol(), "@");
    }
}

#[test]
fn picked_up_items_become_inventory_rows() {
    let (buffer, layout) = render(RenderMode::Shapes, "d");
    let text = buffer_text(&buffer);
    assert!(text.contains("Apple: 1"), "{text}");

    let row_y = layout.inventory.y + 2;
    let row_x = layout.inventory.x + 2;
    assert_eq!(buffer[(row_x, row_y)].bg, Color::Green);
}
