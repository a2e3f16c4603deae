use crate::scroll::ScrollState;

/// What the next render should bring into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Header of the selected card
    Selection,
    /// HTML panel of the card at this index, centred
    Html(usize),
}

#[derive(Debug, Default)]
pub struct ResultsState {
    pub selected: usize,
    pub scroll: ScrollState,
    pending: Option<ScrollTarget>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first card at the top; used whenever the result list changes
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll.reset();
        self.pending = None;
    }

    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
        self.pending = Some(ScrollTarget::Selection);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.pending = Some(ScrollTarget::Selection);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending = Some(ScrollTarget::Selection);
    }

    pub fn select_last(&mut self, count: usize) {
        self.selected = count.saturating_sub(1);
        self.pending = Some(ScrollTarget::Selection);
    }

    /// Keep `selected` inside a list of `count` cards
    pub fn clamp_selection(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn reveal_html(&mut self, index: usize) {
        self.pending = Some(ScrollTarget::Html(index));
    }

    pub fn follow_selection(&mut self) {
        self.pending = Some(ScrollTarget::Selection);
    }

    /// Consume the pending scroll request
    pub fn take_pending(&mut self) -> Option<ScrollTarget> {
        self.pending.take()
    }
}
