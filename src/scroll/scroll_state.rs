/// Vertical scroll position of a pane whose content is a flat list of lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height / 2);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height / 2);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll the least amount needed so lines `start..start + len` are on screen.
    ///
    /// A range taller than the viewport is aligned to its first line.
    pub fn ensure_visible(&mut self, start: usize, len: usize) {
        let viewport = self.viewport_height as usize;
        let offset = self.offset as usize;
        let end = start + len;

        let target = if start < offset || len > viewport {
            start
        } else if end > offset + viewport {
            end - viewport
        } else {
            offset
        };
        self.set_offset(target);
    }

    /// Center lines `start..start + len` in the viewport, as far as bounds allow
    pub fn center_on(&mut self, start: usize, len: usize) {
        let viewport = self.viewport_height as usize;
        let target = if len >= viewport {
            start
        } else {
            (start + len / 2).saturating_sub(viewport / 2)
        };
        self.set_offset(target);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn set_offset(&mut self, target: usize) {
        self.offset = target.min(self.max_offset as usize) as u16;
    }
}
