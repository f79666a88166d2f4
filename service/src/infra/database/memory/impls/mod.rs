//! [`Database`] operations of a [`Memory`] store.

mod booking;
mod house;

use common::pagination;

#[cfg(doc)]
use super::{super::Database, Memory};

/// Selects a [`pagination::Page`] of cursors out of the provided ascending
/// sequence.
fn paginate<C: Copy + Ord>(
    args: &pagination::Arguments<C>,
    ascending: impl DoubleEndedIterator<Item = C>,
) -> pagination::Page<C, C> {
    let kind = args.kind();
    let limit = args.limit();
    let at = args.cursor().copied();

    let ordered = if kind.is_backward() {
        ascending.rev().collect::<Vec<_>>()
    } else {
        ascending.collect()
    };

    let mut edges = Vec::new();
    let mut has_more = false;
    for c in ordered.into_iter().filter(|&c| match at {
        None => true,
        Some(at) if kind.is_including() => {
            if kind.is_forward() {
                c >= at
            } else {
                c <= at
            }
        }
        Some(at) => {
            if kind.is_forward() {
                c > at
            } else {
                c < at
            }
        }
    }) {
        if edges.len() == limit {
            has_more = true;
            break;
        }
        edges.push((c, c));
    }

    pagination::Connection::new(args, edges, has_more)
}

#[cfg(test)]
mod spec {
    use common::pagination::Arguments;

    use super::paginate;

    fn forward(first: usize, after: Option<u8>) -> Arguments<u8> {
        Arguments::Forward {
            first,
            after,
            including: false,
        }
    }

    fn backward(last: usize, before: Option<u8>) -> Arguments<u8> {
        Arguments::Backward {
            last,
            before,
            including: false,
        }
    }

    fn cursors(page: &common::pagination::Page<u8, u8>) -> Vec<u8> {
        page.edges.iter().map(|e| e.cursor).collect()
    }

    #[test]
    fn pages_forward_after_cursor() {
        let page = paginate(&forward(2, Some(2)), [1, 2, 3, 4, 5].into_iter());

        assert_eq!(cursors(&page), [3, 4]);
        assert!(page.has_more);
        assert!(page.page_info().has_next_page);
        assert!(!page.page_info().has_previous_page);
    }

    #[test]
    fn pages_backward_before_cursor() {
        let page = paginate(&backward(2, Some(4)), [1, 2, 3, 4, 5].into_iter());

        assert_eq!(cursors(&page), [3, 2]);
        assert!(page.has_more);
        assert!(page.page_info().has_previous_page);
        assert!(!page.page_info().has_next_page);
    }

    #[test]
    fn includes_cursor_when_asked_to() {
        let args = Arguments::Forward {
            first: 1,
            after: Some(3),
            including: true,
        };
        let page = paginate(&args, [1, 2, 3, 4, 5].into_iter());

        assert_eq!(cursors(&page), [3]);
    }

    #[test]
    fn drains_without_more_pages() {
        let page = paginate(&forward(10, None), [1, 2, 3].into_iter());

        assert_eq!(cursors(&page), [1, 2, 3]);
        assert!(!page.has_more);
    }
}
