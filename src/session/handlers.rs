/*!
 * Command handlers driving a session.
 *
 * Each handler takes the session by value and hands back the next state, so
 * callers own the session explicitly and handlers stay free of side effects.
 */

use log::debug;
use rand::Rng;

use crate::renderer::{PageMeta, PageRenderer, RenderedPage};
use crate::section::{self, ContentType};

use super::models::{Session, SubmitOutcome};

impl Session {
    /// Select the content type used by the next submission
    pub fn handle_select_type(mut self, content_type: ContentType) -> Self {
        self.selected_type = content_type;
        self
    }

    /// Replace the pending raw input
    pub fn handle_input(mut self, raw: impl Into<String>) -> Self {
        self.pending_input = raw.into();
        self
    }

    /// Produce a fragment from the pending input and append it.
    ///
    /// The sequence counter advances and the pending input is cleared even
    /// when nothing was appended.
    pub fn handle_submit_fragment(mut self) -> (Self, SubmitOutcome) {
        let sequence = self.next_sequence;
        let cleared_key = self.input_key();
        let raw = std::mem::take(&mut self.pending_input);

        let appended = match section::produce(self.selected_type, &raw) {
            Some(fragment) => {
                self.fragments.push(fragment);
                true
            }
            None => false,
        };

        debug!(
            "Submitted {} as {} (appended: {}, sections: {})",
            cleared_key,
            self.selected_type,
            appended,
            self.fragments.len()
        );

        self.next_sequence += 1;

        (
            self,
            SubmitOutcome {
                appended,
                sequence,
                cleared_key,
            },
        )
    }

    /// Render the page, or `None` when no section has been added yet
    pub fn handle_generate<R: Rng + ?Sized>(
        &self,
        renderer: &PageRenderer,
        meta: &PageMeta,
        rng: &mut R,
    ) -> Option<RenderedPage> {
        if self.is_empty() {
            return None;
        }
        Some(renderer.render(meta, &self.fragments, rng))
    }

    /// Like [`Session::handle_generate`] with a pinned banner index
    pub fn handle_generate_with_banner(
        &self,
        renderer: &PageRenderer,
        meta: &PageMeta,
        banner_index: u32,
    ) -> Option<RenderedPage> {
        if self.is_empty() {
            return None;
        }
        Some(renderer.render_with_banner(meta, &self.fragments, banner_index))
    }
}
