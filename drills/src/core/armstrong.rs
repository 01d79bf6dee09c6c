/// True if `number` equals the sum of its digits each raised to the digit count.
pub fn is_armstrong_number(number: u64) -> bool {
    let digits: Vec<u32> = number
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .collect();
    let power = digits.len() as u32;
    let total: u128 = digits
        .iter()
        .map(|&digit| u128::from(digit).pow(power))
        .sum();
    total == u128::from(number)
}
