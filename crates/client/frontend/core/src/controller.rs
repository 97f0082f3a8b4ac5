//! Mediates between player input, the model and the views.
//!
//! The controller owns the model and the interface. Frontends translate raw
//! input into calls on [`GameController`] and repaint when the returned
//! [`EventImpact`] asks for it.

use std::path::{Path, PathBuf};

use maze_core::{Command, Direction, ErrorSeverity, ItemKind, MazeModel, ModelError, ModelLoader};
use tracing::{debug, error, info, warn};

use crate::config::FrontendConfig;
use crate::dialog::{Dialog, DialogInput, FileAction, FileMenu, INVALID_FILE_MESSAGE, PathPrompt};
use crate::event::EventImpact;
use crate::interface::GameInterface;
use crate::presentation::PresentationMapper;

pub const WIN_MESSAGE: &str =
    "Congratulations! You have finished all levels and escaped the maze!";
pub const LOSS_MESSAGE: &str = "You lost. Better luck next time!";

pub struct GameController<L, M>
where
    L: ModelLoader,
    M: PresentationMapper,
{
    loader: L,
    model: L::Model,
    game_file: PathBuf,
    interface: GameInterface<M>,
}

impl<L, M> GameController<L, M>
where
    L: ModelLoader,
    M: PresentationMapper,
{
    /// Loads `config.game_file` and sizes the views for its first level.
    pub fn new(loader: L, mapper: M, config: &FrontendConfig) -> Result<Self, ModelError> {
        let model = loader.load(&config.game_file)?;
        let dimensions = model.current_maze().dimensions();
        let interface = GameInterface::new(mapper, config, dimensions);

        info!(
            game_file = %config.game_file.display(),
            render_mode = %config.render_mode,
            rows = dimensions.0,
            cols = dimensions.1,
            "Game loaded"
        );

        Ok(Self {
            loader,
            model,
            game_file: config.game_file.clone(),
            interface,
        })
    }

    pub fn model(&self) -> &L::Model {
        &self.model
    }

    pub fn interface(&self) -> &GameInterface<M> {
        &self.interface
    }

    pub fn game_file(&self) -> &Path {
        &self.game_file
    }

    pub fn is_game_over(&self) -> bool {
        self.model.has_won() || self.model.has_lost()
    }

    /// First paint. Input wiring belongs to the frontend loop.
    pub fn play(&mut self) {
        debug!("Starting game");
        self.redraw();
    }

    pub fn redraw(&mut self) {
        self.interface.draw(
            self.model.current_maze(),
            self.model.current_items(),
            self.model.player_position(),
            self.model.player_inventory(),
            self.model.player_stats(),
        );
    }

    /// Handles a movement key. Anything but `w`/`a`/`s`/`d` is ignored.
    pub fn handle_key(&mut self, key: char) -> EventImpact {
        let Some(direction) = Direction::from_key(key) else {
            return EventImpact::none();
        };
        self.move_player(direction)
    }

    pub fn move_player(&mut self, direction: Direction) -> EventImpact {
        if self.interface.dialog().is_some() {
            return EventImpact::none();
        }
        if self.is_game_over() {
            debug!(?direction, "Ignoring move after game over");
            return EventImpact::none();
        }

        if let Err(err) = self.model.apply(Command::Move(direction)) {
            log_model_error(&err);
        }

        if self.model.did_level_up() {
            let dimensions = self.model.current_maze().dimensions();
            info!(rows = dimensions.0, cols = dimensions.1, "Level up");
            self.interface.set_maze_dimensions(dimensions);
        }

        // The views keep the last frame once the game ends; only the dialog is new.
        if self.model.has_won() {
            info!(elapsed = %self.interface.clock(), "Game won");
            self.finish_game(WIN_MESSAGE);
        } else if self.model.has_lost() {
            info!(elapsed = %self.interface.clock(), "Game lost");
            self.finish_game(LOSS_MESSAGE);
        } else {
            self.redraw();
        }
        EventImpact::redraw()
    }

    pub fn apply_item(&mut self, item: ItemKind) -> EventImpact {
        if self.interface.dialog().is_some() {
            return EventImpact::none();
        }

        debug!(%item, "Using item");
        if let Err(err) = self.model.apply(Command::UseItem(item)) {
            log_model_error(&err);
        }
        self.redraw();
        EventImpact::redraw()
    }

    /// Applies the item shown on the `index`-th inventory row, if any.
    pub fn apply_inventory_row(&mut self, index: usize) -> EventImpact {
        match self.interface.inventory().item_at(index) {
            Some(item) => self.apply_item(item),
            None => EventImpact::none(),
        }
    }

    /// Reloads the current game file from the start.
    pub fn restart_game(&mut self) -> EventImpact {
        info!(game_file = %self.game_file.display(), "Restarting game");
        match self.loader.load(&self.game_file) {
            Ok(model) => self.reset(model),
            Err(err) => {
                log_model_error(&err);
                self.interface
                    .show_dialog(Dialog::Message(INVALID_FILE_MESSAGE.to_string()));
            }
        }
        EventImpact::redraw()
    }

    /// Starts the game stored at `path`. The prompt closes either way.
    pub fn new_game(&mut self, path: &Path) -> EventImpact {
        self.interface.close_dialog();
        match self.loader.load(path) {
            Ok(model) => {
                info!(game_file = %path.display(), "New game");
                self.game_file = path.to_path_buf();
                self.reset(model);
            }
            Err(err) => {
                log_model_error(&err);
                self.interface
                    .show_dialog(Dialog::Message(INVALID_FILE_MESSAGE.to_string()));
            }
        }
        EventImpact::redraw()
    }

    pub fn open_new_game_prompt(&mut self) -> EventImpact {
        self.interface
            .show_dialog(Dialog::NewGame(PathPrompt::new()));
        EventImpact::redraw()
    }

    pub fn open_file_menu(&mut self) -> EventImpact {
        self.interface.show_dialog(Dialog::FileMenu(FileMenu::new()));
        EventImpact::redraw()
    }

    pub fn request_quit(&mut self) -> EventImpact {
        self.interface.show_dialog(Dialog::ConfirmQuit);
        EventImpact::redraw()
    }

    /// Runs a "File" menu entry.
    pub fn activate_file_action(&mut self, action: FileAction) -> EventImpact {
        self.interface.close_dialog();
        match action {
            FileAction::RestartGame => self.restart_game(),
            FileAction::Quit => self.request_quit(),
        }
    }

    /// Routes input to the open dialog. Without one this does nothing.
    pub fn handle_dialog_input(&mut self, input: DialogInput) -> EventImpact {
        let Some(dialog) = self.interface.take_dialog() else {
            return EventImpact::none();
        };

        match (dialog, input) {
            (Dialog::Message(_), DialogInput::Submit | DialogInput::Cancel) => {}
            (Dialog::ConfirmQuit, DialogInput::Submit | DialogInput::Char('y' | 'Y')) => {
                info!("Quit confirmed");
                return EventImpact::quit();
            }
            (Dialog::ConfirmQuit, DialogInput::Cancel | DialogInput::Char('n' | 'N')) => {}
            (Dialog::NewGame(prompt), DialogInput::Submit) => {
                let path = PathBuf::from(prompt.value().trim());
                return self.new_game(&path);
            }
            (Dialog::NewGame(_), DialogInput::Cancel) => {}
            (Dialog::NewGame(mut prompt), DialogInput::Char(ch)) => {
                prompt.push(ch);
                self.interface.show_dialog(Dialog::NewGame(prompt));
            }
            (Dialog::NewGame(mut prompt), DialogInput::Backspace) => {
                prompt.pop();
                self.interface.show_dialog(Dialog::NewGame(prompt));
            }
            (Dialog::FileMenu(menu), DialogInput::Submit) => {
                return self.activate_file_action(menu.selected());
            }
            (Dialog::FileMenu(_), DialogInput::Cancel) => {}
            (Dialog::FileMenu(mut menu), DialogInput::Next) => {
                menu.next();
                self.interface.show_dialog(Dialog::FileMenu(menu));
            }
            (Dialog::FileMenu(mut menu), DialogInput::Previous) => {
                menu.previous();
                self.interface.show_dialog(Dialog::FileMenu(menu));
            }
            (dialog, _) => {
                self.interface.show_dialog(dialog);
                return EventImpact::none();
            }
        }

        EventImpact::redraw()
    }

    /// One second passed.
    pub fn tick_clock(&mut self) -> EventImpact {
        if self.interface.clock_mut().tick() {
            EventImpact::redraw()
        } else {
            EventImpact::none()
        }
    }

    fn finish_game(&mut self, message: &str) {
        self.interface.clock_mut().stop();
        self.interface.show_dialog(Dialog::Message(message.to_string()));
    }

    fn reset(&mut self, model: L::Model) {
        self.model = model;
        let dimensions = self.model.current_maze().dimensions();
        self.interface.set_maze_dimensions(dimensions);
        self.interface.clock_mut().reset();
        self.redraw();
    }
}

fn log_model_error(err: &ModelError) {
    match err.severity() {
        ErrorSeverity::Validation => {
            warn!(code = err.error_code(), error = %err, "Model rejected command")
        }
        ErrorSeverity::Fatal => {
            error!(code = err.error_code(), error = %err, "Model failure")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use maze_core::{Inventory, Maze, PlayerStats, Position, TileKind};

    use super::*;
    use crate::test_support::NamedColours;

    /// Model whose outcome flags are set by the test.
    struct Scripted {
        maze: Maze,
        items: BTreeMap<Position, ItemKind>,
        inventory: Inventory,
        commands: Vec<Command>,
        level_up: Option<Maze>,
        win: bool,
        lose: bool,
        won: bool,
        lost: bool,
        levelled: bool,
    }

    impl Scripted {
        fn new() -> Self {
            Self {
                maze: Maze::new(vec![vec![TileKind::Empty; 3]; 2]),
                items: BTreeMap::new(),
                inventory: [ItemKind::Apple, ItemKind::Coin].into_iter().collect(),
                commands: Vec::new(),
                level_up: None,
                win: false,
                lose: false,
                won: false,
                lost: false,
                levelled: false,
            }
        }
    }

    impl MazeModel for Scripted {
        fn current_maze(&self) -> &Maze {
            &self.maze
        }

        fn current_items(&self) -> &BTreeMap<Position, ItemKind> {
            &self.items
        }

        fn player_position(&self) -> Position {
            Position::ORIGIN
        }

        fn player_inventory(&self) -> &Inventory {
            &self.inventory
        }

        fn player_stats(&self) -> PlayerStats {
            PlayerStats::new(100, 0, 0)
        }

        fn apply(&mut self, command: Command) -> Result<(), ModelError> {
            self.commands.push(command);
            self.levelled = false;
            if let Some(maze) = self.level_up.take() {
                self.maze = maze;
                self.levelled = true;
            }
            self.won = self.win;
            self.lost = self.lose;
            Ok(())
        }

        fn did_level_up(&self) -> bool {
            self.levelled
        }

        fn has_won(&self) -> bool {
            self.won
        }

        fn has_lost(&self) -> bool {
            self.lost
        }
    }

    struct ScriptedLoader;

    impl ModelLoader for ScriptedLoader {
        type Model = Scripted;

        fn load(&self, path: &Path) -> Result<Scripted, ModelError> {
            if path.ends_with("missing.ron") {
                Err(ModelError::load(path, "not found"))
            } else {
                Ok(Scripted::new())
            }
        }
    }

    fn controller() -> GameController<ScriptedLoader, NamedColours> {
        let mut config = FrontendConfig::default();
        config.game_file = PathBuf::from("start.ron");
        let mut controller =
            GameController::new(ScriptedLoader, NamedColours, &config).expect("load");
        controller.play();
        controller
    }

    #[test]
    fn only_wasd_moves() {
        let mut controller = controller();
        assert_eq!(controller.handle_key('x'), EventImpact::none());
        assert_eq!(controller.handle_key('d'), EventImpact::redraw());
        assert_eq!(
            controller.model().commands,
            vec![Command::Move(Direction::Right)]
        );
    }

    #[test]
    fn level_up_resizes_the_level_surface() {
        let mut controller = controller();
        controller.model.level_up = Some(Maze::new(vec![vec![TileKind::Wall; 6]; 5]));

        controller.handle_key('s');

        let surface = controller.interface().level().surface();
        assert_eq!(surface.dimensions(), (5, 6));
        assert_eq!(surface.cell_size(), (10, 6));
    }

    #[test]
    fn winning_stops_the_clock_and_shows_message() {
        let mut controller = controller();
        controller.tick_clock();
        controller.model.win = true;
        controller.model.lose = true;

        controller.handle_key('w');

        assert!(controller.interface().clock().is_stopped());
        assert_eq!(
            controller.interface().dialog(),
            Some(&Dialog::Message(WIN_MESSAGE.to_string()))
        );
        assert_eq!(controller.tick_clock(), EventImpact::none());
        assert_eq!(controller.interface().clock().display(), "0m 1s");
    }

    #[test]
    fn losing_shows_message_and_blocks_further_moves() {
        let mut controller = controller();
        controller.model.lose = true;
        controller.handle_key('a');
        assert_eq!(
            controller.interface().dialog(),
            Some(&Dialog::Message(LOSS_MESSAGE.to_string()))
        );

        controller.handle_dialog_input(DialogInput::Submit);
        assert!(controller.interface().dialog().is_none());
        assert_eq!(controller.handle_key('a'), EventImpact::none());
        assert_eq!(controller.model().commands.len(), 1);
    }

    #[test]
    fn inventory_row_applies_item() {
        let mut controller = controller();
        assert_eq!(controller.interface().inventory().rows().len(), 1);

        controller.apply_inventory_row(0);
        assert_eq!(controller.apply_inventory_row(3), EventImpact::none());
        assert_eq!(
            controller.model().commands,
            vec![Command::UseItem(ItemKind::Apple)]
        );
    }

    #[test]
    fn invalid_new_game_keeps_current_file() {
        let mut controller = controller();
        controller.open_new_game_prompt();
        for ch in "missing.ron".chars() {
            controller.handle_dialog_input(DialogInput::Char(ch));
        }
        controller.handle_dialog_input(DialogInput::Submit);

        assert_eq!(controller.game_file(), Path::new("start.ron"));
        assert_eq!(
            controller.interface().dialog(),
            Some(&Dialog::Message(INVALID_FILE_MESSAGE.to_string()))
        );
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut controller = controller();
        controller.request_quit();
        assert_eq!(
            controller.handle_dialog_input(DialogInput::Char('n')),
            EventImpact::redraw()
        );
        assert!(controller.interface().dialog().is_none());

        controller.open_file_menu();
        controller.handle_dialog_input(DialogInput::Next);
        controller.handle_dialog_input(DialogInput::Submit);
        assert_eq!(controller.interface().dialog(), Some(&Dialog::ConfirmQuit));
        assert_eq!(
            controller.handle_dialog_input(DialogInput::Submit),
            EventImpact::quit()
        );
    }

    #[test]
    fn moves_are_ignored_while_a_dialog_is_open() {
        let mut controller = controller();
        controller.open_file_menu();
        assert_eq!(controller.handle_key('w'), EventImpact::none());
        assert!(controller.model().commands.is_empty());
    }
}
