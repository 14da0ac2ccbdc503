// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fill the regions a warp left uncovered.
//
// A breadth-first sweep starting from holes that touch covered pixels. Each
// hole takes the average of its already-known 8-neighbours, so colour bleeds
// inward from the edge of the page one ring at a time.

use std::collections::VecDeque;

use image::{GrayImage, Rgba, RgbaImage};

const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Copy of `image` where every pixel with `coverage == 0` is synthesised from
/// its covered surroundings. Returns the image unchanged when nothing is
/// covered, or when the mask size does not match.
pub fn fill_uncovered(image: &RgbaImage, coverage: &GrayImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut output = image.clone();
    if coverage.dimensions() != (width, height) {
        return output;
    }

    let idx = |x: u32, y: u32| (y as usize) * (width as usize) + x as usize;
    let mut known: Vec<bool> = coverage.pixels().map(|p| p[0] > 0).collect();
    if !known.iter().any(|&k| k) {
        return output;
    }

    let neighbours = move |x: u32, y: u32| {
        NEIGHBOURS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            (nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64)
                .then_some((nx as u32, ny as u32))
        })
    };

    let mut queued = vec![false; known.len()];
    let mut queue = VecDeque::new();
    for y in 0..height {
        for x in 0..width {
            if known[idx(x, y)] {
                continue;
            }
            if neighbours(x, y).any(|(nx, ny)| known[idx(nx, ny)]) {
                queued[idx(x, y)] = true;
                queue.push_back((x, y));
            }
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        let mut sum = [0u32; 4];
        let mut count = 0u32;
        for (nx, ny) in neighbours(x, y) {
            if known[idx(nx, ny)] {
                let p = output.get_pixel(nx, ny);
                for c in 0..4 {
                    sum[c] += p[c] as u32;
                }
                count += 1;
            }
        }
        if count > 0 {
            let avg = sum.map(|s| ((s + count / 2) / count) as u8);
            output.put_pixel(x, y, Rgba(avg));
        }
        known[idx(x, y)] = true;

        for (nx, ny) in neighbours(x, y) {
            let i = idx(nx, ny);
            if !known[i] && !queued[i] {
                queued[i] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    output
}
