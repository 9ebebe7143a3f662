//! User-facing alert templates (Indonesian) keyed by spending status.
//! Pure formatting: template selection plus number substitution.

use crate::models::insight::{Alert, AlertType, SpendingStatus};

pub const URGENT_RECOMMENDATIONS: &[&str] = &[
    "Kurangi pengeluaran tidak perlu",
    "Buat prioritas kebutuhan vs keinginan",
    "Pertimbangkan sumber pendapatan tambahan",
    "Buat catatan keuangan harian",
];

pub const WARNING_RECOMMENDATIONS: &[&str] = &[
    "Evaluasi pola pengeluaran",
    "Buat anggaran bulanan yang ketat",
    "Identifikasi area penghematan",
    "Pertimbangkan sumber pendapatan tambahan",
];

pub const INFO_RECOMMENDATIONS: &[&str] = &[
    "Pertahankan pola pengeluaran saat ini",
    "Lanjutkan kebiasaan menabung",
    "Evaluasi berkala tetap diperlukan",
];

/// Currency formatting: thousands separators plus two decimals,
/// e.g. 1234567.89 -> "1,234,567.89".
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}

fn spending_ratio(total_spending: f64, savings_balance: f64) -> f64 {
    if savings_balance == 0.0 {
        return 0.0;
    }

    (total_spending / savings_balance) * 100.0
}

pub fn build_alert(status: &SpendingStatus, total_spending: f64, savings_balance: f64) -> Alert {
    match status.code {
        "CRITICAL_OVERSPENDING" => {
            let shortfall = total_spending - savings_balance;

            Alert {
                alert_type: AlertType::Urgent,
                message: format!(
                    "\n🚨 PERINGATAN KEUANGAN KRITIS 🚨\n\n\
                     Pengeluaran Anda telah MELEBIHI total tabungan.\n\n\
                     Detail Keuangan:\n\
                     • Total Tabungan: Rp {}\n\
                     • Total Pengeluaran: Rp {}\n\
                     • Selisih: Rp {}\n\n\
                     Segera lakukan tindakan untuk mengendalikan keuangan Anda!",
                    format_amount(savings_balance),
                    format_amount(total_spending),
                    format_amount(shortfall),
                ),
                recommendations: URGENT_RECOMMENDATIONS.to_vec(),
            }
        }
        "POTENTIAL_OVERSPENDING" => Alert {
            alert_type: AlertType::Warning,
            message: format!(
                "\n⚠️ PERINGATAN POLA PENGELUARAN ⚠️\n\n\
                 Pola pengeluaran Anda menunjukkan risiko keuangan.\n\n\
                 Detail:\n\
                 • Rasio Pengeluaran: {:.2}%\n\
                 • Total Tabungan: Rp {}\n\
                 • Total Pengeluaran: Rp {}\n\n\
                 Perhatian diperlukan untuk mencegah risiko keuangan!",
                spending_ratio(total_spending, savings_balance),
                format_amount(savings_balance),
                format_amount(total_spending),
            ),
            recommendations: WARNING_RECOMMENDATIONS.to_vec(),
        },
        _ => Alert {
            alert_type: AlertType::Info,
            message: format!(
                "\n✅ MANAJEMEN KEUANGAN BAIK ✅\n\n\
                 Anda sedang melakukan manajemen keuangan dengan sangat baik!\n\n\
                 Detail:\n\
                 • Rasio Pengeluaran: {:.2}%\n\
                 • Total Tabungan: Rp {}\n\
                 • Total Pengeluaran: Rp {}\n\n\
                 Tetap pertahankan kinerja keuangan Anda!",
                spending_ratio(total_spending, savings_balance),
                format_amount(savings_balance),
                format_amount(total_spending),
            ),
            recommendations: INFO_RECOMMENDATIONS.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::risk;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.89), "1,234,567.89");
        assert_eq!(format_amount(500_000.0), "500,000.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(-1_000.0), "-1,000.00");
    }

    #[test]
    fn critical_status_selects_urgent_template() {
        let (status, _) = risk::classify(0.9, 20.0);
        let alert = build_alert(&status, 1_500_000.0, 1_000_000.0);

        assert_eq!(alert.alert_type, AlertType::Urgent);
        assert!(alert.message.contains("PERINGATAN KEUANGAN KRITIS"));
        assert!(alert.message.contains("Selisih: Rp 500,000.00"));
        assert_eq!(alert.recommendations, URGENT_RECOMMENDATIONS.to_vec());
    }

    #[test]
    fn potential_status_selects_warning_template_with_ratio() {
        let (status, _) = risk::classify(0.9, 66.0);
        let alert = build_alert(&status, 500_000.0, 1_000_000.0);

        assert_eq!(alert.alert_type, AlertType::Warning);
        assert!(alert.message.contains("Rasio Pengeluaran: 50.00%"));
        assert_eq!(alert.recommendations, WARNING_RECOMMENDATIONS.to_vec());
    }

    #[test]
    fn healthy_status_selects_info_template() {
        let (status, _) = risk::classify(0.1, 80.0);
        let alert = build_alert(&status, 200_000.0, 1_000_000.0);

        assert_eq!(alert.alert_type, AlertType::Info);
        assert!(alert.message.contains("MANAJEMEN KEUANGAN BAIK"));
        assert_eq!(alert.recommendations, INFO_RECOMMENDATIONS.to_vec());
    }

    #[test]
    fn zero_balance_ratio_does_not_divide_by_zero() {
        assert_eq!(spending_ratio(100.0, 0.0), 0.0);
    }
}
