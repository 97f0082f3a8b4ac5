//! Rendering handlers.

use anyhow::Result;
use maze_core::ModelLoader;
use ratatui::{Terminal, backend::Backend};

use super::super::EventLoop;
use crate::presentation::ui;

impl<L> EventLoop<'_, L>
where
    L: ModelLoader,
{
    /// Draw the current interface and remember its layout.
    pub(in crate::event) fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let ctx = ui::RenderContext {
            interface: self.controller.interface(),
            controls_height: self.ui.controls_height,
        };
        self.layout = ui::draw(terminal, &ctx)?;
        Ok(())
    }
}
