//! Mouse clicks, hit tested against the last rendered layout.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use maze_core::{MazeModel, ModelLoader};
use maze_frontend_core::{EventImpact, Point};
use tracing::debug;

use super::super::EventLoop;

impl<L> EventLoop<'_, L>
where
    L: ModelLoader,
{
    pub(in crate::event) fn handle_mouse(&mut self, mouse: MouseEvent) -> EventImpact {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventImpact::none();
        }
        let Some(hit) = self.layout.hit(mouse.column, mouse.row) else {
            return EventImpact::none();
        };

        let dialog_open = self.controller.interface().dialog().is_some();
        let action = self.input.handle_click(hit, dialog_open);
        self.dispatch(action)
    }

    /// Level clicks have no game effect; they are only logged.
    pub(in crate::event) fn inspect(&mut self, point: Point) -> EventImpact {
        let surface = self.controller.interface().level().surface();
        match surface.pixel_to_position(point) {
            Some(position) => {
                let tile = self.controller.model().current_maze().tile(position);
                debug!(?position, ?tile, "Level cell clicked");
            }
            None => debug!(?point, "Click outside the maze"),
        }
        EventImpact::none()
    }
}
