//! Pure path-replication geometry: one raw stroke path in, N rotated (and
//! optionally reflected) copies out. The raster pass consumes the output
//! directly; nothing here touches pixels.

use egui::Pos2;

/// Rotate `point` by `angle` radians about `center`.
fn rotate_about(point: Pos2, center: Pos2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Pos2::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Map one user-drawn path into its sector copies.
///
/// For each sector `i in 0..sectors` the path is rotated by `i * 360/sectors`
/// degrees about `center`. With `mirror` set, each sector additionally gets
/// the copy obtained by reflecting the raw path across the vertical
/// centerline (`x -> canvas_width - x`) and applying the same rotation.
///
/// Output order is sector 0 primary, sector 0 mirror, sector 1 primary, ... —
/// the order the copies hit the buffer, which is observable for eraser
/// strokes where later copies can re-clear pixels earlier copies crossed.
///
/// `sectors == 0` produces no copies (and no division by zero).
pub fn replicate(
    path: &[Pos2],
    sectors: u32,
    mirror: bool,
    center: Pos2,
    canvas_width: f32,
) -> Vec<Vec<Pos2>> {
    if sectors == 0 || path.is_empty() {
        return Vec::new();
    }

    let theta = std::f32::consts::TAU / sectors as f32;
    let copy_count = if mirror { 2 * sectors } else { sectors };
    let mut copies = Vec::with_capacity(copy_count as usize);

    for i in 0..sectors {
        let angle = theta * i as f32;
        copies.push(
            path.iter()
                .map(|&p| rotate_about(p, center, angle))
                .collect(),
        );
        if mirror {
            // Reflect first, then rotate: the same composition the transform
            // stack applies when the mirrored copy is drawn.
            copies.push(
                path.iter()
                    .map(|&p| rotate_about(Pos2::new(canvas_width - p.x, p.y), center, angle))
                    .collect(),
            );
        }
    }

    copies
}
