const SOUNDS: [(u64, &str); 3] = [(3, "Pling"), (5, "Plang"), (7, "Plong")];

/// Raindrop sounds for each of 3, 5 and 7 dividing `number`, else the number itself.
pub fn convert(number: u64) -> String {
    let sounds: String = SOUNDS
        .iter()
        .filter(|(divisor, _)| number % divisor == 0)
        .map(|(_, sound)| *sound)
        .collect();
    if sounds.is_empty() {
        number.to_string()
    } else {
        sounds
    }
}
