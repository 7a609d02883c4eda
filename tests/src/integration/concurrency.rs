//! # Cursor Independence Across Threads
//!
//! A domain is immutable and every cursor owns its bounds, so many threads
//! can walk the same domain at once without coordination.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use lattice_core::{Domain3, DomainCursor, Point3};

    fn volume() -> Domain3 {
        Domain3::new(Point3::new([-4, 0, 2]), Point3::new([5, 7, 9])).expect("valid bounds")
    }

    #[test]
    fn test_threads_share_domain_with_independent_cursors() {
        let domain = volume();
        let expected = domain.size().expect("small") as usize;

        let counts: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let mut it = domain.begin();
                        let end = domain.end();
                        let mut n = 0;
                        while it != end {
                            assert!(domain.contains(it.current()));
                            n += 1;
                            it.advance();
                        }
                        n
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        assert!(counts.iter().all(|&n| n == expected), "Counts: {counts:?}");
    }

    #[test]
    fn test_split_by_slices_covers_domain_once() {
        let domain = volume();

        // Each worker walks one z-slice with its own cursor.
        let slices: Vec<Vec<Point3>> = thread::scope(|s| {
            let handles: Vec<_> = (domain.lower()[2]..=domain.upper()[2])
                .map(|z| {
                    let lower = Point3::new([domain.lower()[0], domain.lower()[1], z]);
                    let upper = Point3::new([domain.upper()[0], domain.upper()[1], z]);
                    s.spawn(move || {
                        let mut it = DomainCursor::new(lower, lower, upper);
                        let mut out = Vec::new();
                        while let Some(p) = it.get() {
                            out.push(*p);
                            it.advance();
                        }
                        out
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        let merged: Vec<Point3> = slices.into_iter().flatten().collect();
        let unique: HashSet<_> = merged.iter().copied().collect();
        assert_eq!(unique.len(), merged.len(), "No point visited twice");

        let sequential: Vec<Point3> = domain.iter().collect();
        assert_eq!(merged, sequential, "Slices in z order reproduce the traversal");
    }

    #[test]
    fn test_cursor_copy_moves_to_another_thread() {
        let domain = volume();
        let mut it = domain.begin();
        for _ in 0..37 {
            it.advance();
        }
        let snapshot = it;

        let advanced = thread::spawn(move || {
            let mut it = snapshot;
            it.advance();
            *it.current()
        })
        .join()
        .expect("worker panicked");

        assert_eq!(it.current(), snapshot.current(), "Copy must not alias");
        it.advance();
        assert_eq!(*it.current(), advanced);
    }
}
