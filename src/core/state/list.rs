//! Pagination state management for remote collections
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through the `update` function
//! - All state transitions are explicitly defined as `ListMsg` variants
//! - The module is self-contained and doesn't know which collection it
//!   paginates; the caller attaches the collection to emitted requests
//!
//! One instance of this state machine backs the thread list and another the
//! post list of the currently open thread.

use crate::core::msg::list::ListMsg;
use crate::domain::forum::PAGE_SIZE;

/// Lifecycle phase of a paginated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    /// Created, nothing fetched yet
    #[default]
    Idle,
    /// A page fetch is in flight
    Loading,
    /// At least one fetch completed successfully
    Loaded,
    /// The initial fetch failed; the list has no content
    Error,
}

/// A page fetch the caller must dispatch
///
/// `generation` tags the request so that its eventual result can be matched
/// against the list's current generation and dropped when stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub offset: usize,
    pub generation: u64,
}

/// Accumulated pages of a remote collection plus the bookkeeping needed to
/// fetch the next one.
///
/// Items are insertion-ordered and append-only between resets; duplicates by
/// identifier are not deduplicated. The selection cursor is view state but
/// lives here because every transition that rewrites `items` must also fix
/// it up.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    offset: usize,
    phase: ListPhase,
    error: Option<String>,
    has_more: bool,
    generation: u64,
    page_size: usize,
    selected_index: Option<usize>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            phase: ListPhase::Idle,
            error: None,
            has_more: true,
            generation: 0,
            page_size: PAGE_SIZE,
            selected_index: None,
        }
    }
}

impl<T> PagedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page size (tests only need small pages)
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items already requested; always a multiple of the page size
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a further page load is likely to return data
    ///
    /// Derived only from the length of the most recently fetched page. A
    /// collection whose size is an exact multiple of the page size therefore
    /// reports `true` after the last full page and needs one extra fetch of
    /// an empty page to settle.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Generation under which new requests are issued
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected_index.and_then(|i| self.items.get(i))
    }

    /// Update the list state based on a message
    ///
    /// Returns the page fetch the caller must dispatch, if the transition
    /// started one. At most one fetch is ever in flight: `Loading` blocks
    /// both explicit loads and the scroll-past-the-end load.
    pub fn update(&mut self, msg: ListMsg<T>) -> Option<FetchRequest> {
        match msg {
            ListMsg::LoadInitial => {
                // Only meaningful before the first fetch; reloads go through
                // ResetAndReload
                if self.phase != ListPhase::Idle {
                    return None;
                }
                self.phase = ListPhase::Loading;
                Some(FetchRequest {
                    offset: self.offset,
                    generation: self.generation,
                })
            }

            ListMsg::LoadMore => self.request_more(),

            ListMsg::ResetAndReload => {
                // Bumping the generation orphans any in-flight fetch
                self.generation += 1;
                self.items.clear();
                self.offset = 0;
                self.has_more = true;
                self.error = None;
                self.selected_index = None;
                self.phase = ListPhase::Loading;
                Some(FetchRequest {
                    offset: 0,
                    generation: self.generation,
                })
            }

            ListMsg::PageLoaded { generation, items } => {
                if generation != self.generation {
                    // Result of a fetch that outlived a reset; drop it
                    return None;
                }
                let page_len = items.len();
                self.items.extend(items);
                self.offset += self.page_size;
                self.has_more = page_len == self.page_size;
                self.error = None;
                self.phase = ListPhase::Loaded;
                None
            }

            ListMsg::LoadFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    return None;
                }
                // A failed page is not counted toward the offset; retrying
                // re-requests the same page
                self.error = Some(message);
                self.phase = if self.items.is_empty() && self.offset == 0 {
                    ListPhase::Error
                } else {
                    ListPhase::Loaded
                };
                None
            }

            ListMsg::ScrollUp => {
                match self.selected_index {
                    Some(current) if current > 0 => self.selected_index = Some(current - 1),
                    Some(_) => {}
                    None => self.select_first(),
                }
                None
            }

            ListMsg::ScrollDown => {
                match self.selected_index {
                    Some(current) if current + 1 < self.items.len() => {
                        self.selected_index = Some(current + 1);
                        None
                    }
                    // Already on the last loaded item: try to pull in the
                    // next page
                    Some(_) => self.request_more(),
                    None => {
                        self.select_first();
                        None
                    }
                }
            }

            ListMsg::ScrollToTop => {
                self.select_first();
                None
            }

            ListMsg::ScrollToBottom => {
                if !self.items.is_empty() {
                    self.selected_index = Some(self.items.len() - 1);
                }
                None
            }

            ListMsg::Select(index) => {
                if index < self.items.len() {
                    self.selected_index = Some(index);
                } else {
                    self.selected_index = None;
                }
                None
            }

            ListMsg::Unselect => {
                self.selected_index = None;
                None
            }
        }
    }

    /// Forget the accumulated state without starting a fetch
    ///
    /// Used when the owning view goes away (e.g. a different thread is
    /// opened). Bumps the generation so a fetch still in flight for the old
    /// content can never be applied to the new one.
    pub fn discard(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.offset = 0;
        self.has_more = true;
        self.error = None;
        self.selected_index = None;
        self.phase = ListPhase::Idle;
    }

    fn request_more(&mut self) -> Option<FetchRequest> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        self.phase = ListPhase::Loading;
        Some(FetchRequest {
            offset: self.offset,
            generation: self.generation,
        })
    }

    fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = Some(0);
        }
    }
}
