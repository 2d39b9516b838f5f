/// Service centers and lockboxes accepted by the calculator, in display
/// order. The list does not depend on the selected form.
pub const SERVICE_CENTERS: &[&str] = &[
    "California Service Center",
    "Nebraska Service Center",
    "Potomac Service Center",
    "Texas Service Center",
    "Vermont Service Center",
    "National Benefits Center",
    "Chicago Lockbox",
    "Dallas Lockbox",
    "Phoenix Lockbox",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_fixed_and_non_empty() {
        assert_eq!(SERVICE_CENTERS.len(), 9);
        assert!(SERVICE_CENTERS.iter().all(|center| !center.is_empty()));
        assert_eq!(SERVICE_CENTERS[0], "California Service Center");
        assert_eq!(SERVICE_CENTERS[8], "Phoenix Lockbox");
    }
}
