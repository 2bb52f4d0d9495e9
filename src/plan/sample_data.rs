use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::datatype::DebtSnapshot;

/// Extra monthly payment used by the demo.
pub const SAMPLE_EXTRA_PAYMENT: Decimal = dec!(100);

pub fn sample_debts() -> Vec<DebtSnapshot> {
    vec![
        DebtSnapshot::new(1, "Visa", dec!(3200.00), dec!(19.99), dec!(95.00)),
        DebtSnapshot::new(2, "Car loan", dec!(8500.00), dec!(6.5), dec!(210.00)),
        DebtSnapshot::new(3, "Student line", dec!(12000.00), dec!(4.75), dec!(140.00)),
        DebtSnapshot::new(4, "Store card", dec!(650.00), dec!(24.99), dec!(35.00)),
    ]
}
