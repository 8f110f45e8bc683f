//! Tab expansion and raw/rendered column conversion.
//!
//! A row is stored as raw bytes and displayed as a rendered form where every
//! tab is expanded to spaces up to the next tab stop. These functions are the
//! only place that knows how the two coordinate systems relate.

/// Default number of columns between tab stops.
pub const DEFAULT_TAB_STOP: usize = 4;

/// Returns the rendered width a byte adds when it starts at rendered column `rx`.
#[inline]
fn advance(byte: u8, rx: usize, tab_stop: usize) -> usize {
    if byte == b'\t' {
        tab_stop - (rx % tab_stop)
    } else {
        1
    }
}

/// Expands the raw bytes of a row into their display form.
pub fn render(raw: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut rendered = Vec::with_capacity(raw.len() + tabs * (tab_stop - 1));

    for &byte in raw {
        if byte == b'\t' {
            rendered.push(b' ');
            while rendered.len() % tab_stop != 0 {
                rendered.push(b' ');
            }
        } else {
            rendered.push(byte);
        }
    }

    rendered
}

/// Converts a raw column into a rendered column.
///
/// `cx` past the end of the row is treated as the end of the row.
pub fn cx_to_rx(raw: &[u8], cx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    raw.iter()
        .take(cx)
        .fold(0, |rx, &byte| rx + advance(byte, rx, tab_stop))
}

/// Converts a rendered column back into a raw column.
///
/// Returns the raw index of the first byte whose rendered extent goes past
/// `rx`, so a column in the middle of an expanded tab maps to the tab itself.
/// Columns beyond the row map to the row length.
pub fn rx_to_cx(raw: &[u8], rx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut cur_rx = 0;

    for (cx, &byte) in raw.iter().enumerate() {
        cur_rx += advance(byte, cur_rx, tab_stop);
        if cur_rx > rx {
            return cx;
        }
    }

    raw.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        assert_eq!(render(b"hello", 4), b"hello".to_vec());
        assert!(render(b"", 4).is_empty());
    }

    #[test]
    fn test_render_tabs() {
        assert_eq!(render(b"\tx", 4), b"    x".to_vec());
        assert_eq!(render(b"ab\tc", 4), b"ab  c".to_vec());
        assert_eq!(render(b"abcd\te", 4), b"abcd    e".to_vec());
        assert_eq!(render(b"a\tb", 8), b"a       b".to_vec());
    }

    #[test]
    fn test_cx_to_rx() {
        let raw = b"a\tbc";
        assert_eq!(cx_to_rx(raw, 0, 4), 0);
        assert_eq!(cx_to_rx(raw, 1, 4), 1);
        assert_eq!(cx_to_rx(raw, 2, 4), 4);
        assert_eq!(cx_to_rx(raw, 3, 4), 5);
        assert_eq!(cx_to_rx(raw, 4, 4), 6);
        // Past the end is clamped to the row.
        assert_eq!(cx_to_rx(raw, 10, 4), 6);
    }

    #[test]
    fn test_rx_to_cx_first_exceeds() {
        let raw = b"a\tbc";
        assert_eq!(rx_to_cx(raw, 0, 4), 0);
        // Columns 1..4 are all covered by the tab.
        assert_eq!(rx_to_cx(raw, 1, 4), 1);
        assert_eq!(rx_to_cx(raw, 2, 4), 1);
        assert_eq!(rx_to_cx(raw, 3, 4), 1);
        assert_eq!(rx_to_cx(raw, 4, 4), 2);
        assert_eq!(rx_to_cx(raw, 5, 4), 3);
        assert_eq!(rx_to_cx(raw, 6, 4), 4);
        assert_eq!(rx_to_cx(raw, 100, 4), 4);
    }

    #[test]
    fn test_conversions_consistent_at_boundaries() {
        let raw = b"\tif (x)\t{\t}";
        for cx in 0..=raw.len() {
            let rx = cx_to_rx(raw, cx, 4);
            assert_eq!(rx_to_cx(raw, rx, 4), cx);
        }
        // Any rendered column maps back to the smallest character boundary
        // at or before it.
        let rendered_len = render(raw, 4).len();
        for rx in 0..rendered_len {
            let cx = rx_to_cx(raw, rx, 4);
            assert!(cx_to_rx(raw, cx, 4) <= rx);
            assert!(cx_to_rx(raw, cx + 1, 4) > rx);
        }
    }
}
