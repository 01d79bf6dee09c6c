/// Points for a dart landing at `(x, y)` on a board centred at the origin.
pub fn score(x: f64, y: f64) -> u8 {
    let distance = x.hypot(y);
    if distance <= 1.0 {
        10
    } else if distance <= 5.0 {
        5
    } else if distance <= 10.0 {
        1
    } else {
        0
    }
}
