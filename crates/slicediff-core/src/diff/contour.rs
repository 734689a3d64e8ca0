use std::collections::HashMap;

use ndarray::Array2;

use crate::raster::Bounds;

struct ComponentStats {
    first_seen: usize,
    min_row: usize,
    max_row: usize,
    min_col: usize,
    max_col: usize,
}

/// Extract the external contours of a binary mask as bounding rectangles.
///
/// Foreground is any non-zero pixel. Connected regions are found with
/// two-pass labeling over an 8-connected neighborhood using union-find;
/// holes and nested boundaries inside a region are excluded by
/// construction. Rectangles are returned in scan order (first foreground
/// pixel of each region), which is deterministic for a given mask.
pub fn external_contours(mask: &Array2<u8>) -> Vec<Bounds> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels from already-visited neighbors.
    for row in 0..h {
        for col in 0..w {
            if mask[[row, col]] == 0 {
                continue;
            }

            let mut neighbors = [0u32; 4];
            let mut n = 0;
            if row > 0 {
                if col > 0 && labels[[row - 1, col - 1]] > 0 {
                    neighbors[n] = labels[[row - 1, col - 1]];
                    n += 1;
                }
                if labels[[row - 1, col]] > 0 {
                    neighbors[n] = labels[[row - 1, col]];
                    n += 1;
                }
                if col + 1 < w && labels[[row - 1, col + 1]] > 0 {
                    neighbors[n] = labels[[row - 1, col + 1]];
                    n += 1;
                }
            }
            if col > 0 && labels[[row, col - 1]] > 0 {
                neighbors[n] = labels[[row, col - 1]];
                n += 1;
            }

            if n == 0 {
                // New label.
                if next_label as usize >= parent.len() {
                    parent.resize(parent.len() * 2, 0);
                }
                parent[next_label as usize] = next_label;
                labels[[row, col]] = next_label;
                next_label += 1;
            } else {
                let smallest = *neighbors[..n].iter().min().unwrap();
                labels[[row, col]] = smallest;
                for &other in &neighbors[..n] {
                    if other != smallest {
                        union(&mut parent, smallest, other);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and collect per-component extents.
    let mut stats_map = HashMap::<u32, ComponentStats>::new();
    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];

            let entry = stats_map.entry(root).or_insert(ComponentStats {
                first_seen: row * w + col,
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            });
            entry.first_seen = entry.first_seen.min(row * w + col);
            entry.min_row = entry.min_row.min(row);
            entry.max_row = entry.max_row.max(row);
            entry.min_col = entry.min_col.min(col);
            entry.max_col = entry.max_col.max(col);
        }
    }

    let mut components: Vec<ComponentStats> = stats_map.into_values().collect();
    components.sort_unstable_by_key(|c| c.first_seen);

    components
        .into_iter()
        .map(|c| Bounds {
            x: c.min_col,
            y: c.min_row,
            width: c.max_col - c.min_col + 1,
            height: c.max_row - c.min_row + 1,
        })
        .collect()
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
