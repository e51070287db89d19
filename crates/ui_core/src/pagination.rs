//! Pagination range computation for windowed page controls.
//!
//! The calculator produces the ordered token sequence a pagination surface renders:
//! concrete page numbers plus ellipsis markers standing in for collapsed spans. It
//! holds no state, and out-of-range input degrades to a clamped window instead of
//! failing.

use serde::{Deserialize, Serialize};

/// One slot in a computed pagination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageToken {
    /// A concrete 1-indexed page number.
    Page(u32),
    /// A collapsed span of pages.
    Ellipsis,
}

/// Computed pagination window plus the boundary flags the control surface consumes
/// to disable its previous/next affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// Ordered token sequence to render.
    pub tokens: Vec<PageToken>,
    /// Whether the current page is the first page.
    pub is_first_page: bool,
    /// Whether the current page is the last page.
    pub is_last_page: bool,
}

impl PageRange {
    /// Computes the window for the supplied pagination inputs.
    pub fn compute(current_page: u32, total_pages: u32, sibling_count: u32) -> Self {
        Self {
            tokens: compute_page_range(current_page, total_pages, sibling_count),
            is_first_page: current_page <= 1,
            is_last_page: current_page >= total_pages,
        }
    }
}

/// Computes the ordered page/ellipsis token sequence for a pagination control.
///
/// The window always anchors the first and last page and keeps up to `sibling_count`
/// neighbors on each side of `current_page`; the spans between anchors collapse to
/// [`PageToken::Ellipsis`]. When every page fits without collapsing, the full
/// enumeration `1..=total_pages` is returned. The same inputs always produce the same
/// sequence.
pub fn compute_page_range(
    current_page: u32,
    total_pages: u32,
    sibling_count: u32,
) -> Vec<PageToken> {
    // First page, last page, current page, and up to two ellipsis slots.
    let total_slots = sibling_count + 5;
    if total_slots >= total_pages {
        return pages(1, total_pages);
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);
    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 2;

    // Pages shown on the anchored edge when only one span collapses.
    let edge_count = 3 + 2 * sibling_count;

    if !show_left_ellipsis && show_right_ellipsis {
        let mut tokens = pages(1, edge_count);
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
        return tokens;
    }

    if show_left_ellipsis && !show_right_ellipsis {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend(pages(
            total_pages.saturating_sub(edge_count).saturating_add(1),
            total_pages,
        ));
        return tokens;
    }

    if show_left_ellipsis && show_right_ellipsis {
        let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
        tokens.extend(pages(left_sibling, right_sibling));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
        return tokens;
    }

    Vec::new()
}

fn pages(start: u32, end: u32) -> Vec<PageToken> {
    (start..=end).map(PageToken::Page).collect()
}
