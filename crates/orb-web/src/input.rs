use glam::Vec2;
use orb_core::Touches;
use web_sys as web;

#[inline]
pub fn mouse_client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// All active touches of `ev` in client coordinates.
pub fn touch_points(ev: &web::TouchEvent) -> Touches {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
