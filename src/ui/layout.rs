use ratatui::layout::{Position, Rect};

/// Rows taken by one catalog card.
pub const CARD_HEIGHT: u16 = 6;

const HEADER_HEIGHT: u16 = 3;
const FILTER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen regions from top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub filter: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let filter_height = FILTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(header_height + filter_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let filter = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: filter_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + filter_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + filter_height + footer_height),
    };
    Regions {
        header,
        filter,
        body,
        footer,
    }
}

/// Grid columns for a body `width`: 1 narrow, 2 medium, 3 wide.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Whole card rows that fit in `height`, at least one.
pub fn visible_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// First grid row to show so that `focused` stays on screen.
pub fn first_row_for(focused: usize, columns: usize, visible_rows: usize) -> usize {
    let row = focused / columns.max(1);
    row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Cell rectangles for `count` slots laid out in `columns`, scrolled by `first_row`.
///
/// Slots outside `area` are skipped; the returned pairs are `(slot index, rect)`.
pub fn grid_cells(area: Rect, count: usize, columns: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let cell_width = area.width / columns as u16;
    if cell_width == 0 || area.height == 0 {
        return Vec::new();
    }

    let mut cells = Vec::new();
    for index in 0..count {
        let row = index / columns;
        let column = index % columns;
        if row < first_row {
            continue;
        }
        let top = (row - first_row) as u32 * CARD_HEIGHT as u32;
        if top >= area.height as u32 {
            break;
        }
        let y = area.y + top as u16;
        let x = area.x + column as u16 * cell_width;
        // The last column absorbs the rounding remainder.
        let width = if column + 1 == columns {
            area.right().saturating_sub(x)
        } else {
            cell_width
        };
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        cells.push((index, Rect::new(x, y, width, height)));
    }
    cells
}

/// Slot under a screen position.
pub fn slot_at(cells: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    cells
        .iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(index, _)| *index)
}

/// Centers a `width` x `height` rect inside `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
