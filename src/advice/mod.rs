//! Structured recommendations keyed on the glucose band
//!
//! Selection logic only: each band maps to a fixed set of recommended
//! actions with an urgency level. Rendering the advice as prose is the
//! presentation layer's job.

use crate::models::types::{GlucoseBand, RiskLevel};

/// One recommended action for a glucose band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Short action heading
    pub action: &'static str,
    /// What the action involves
    pub detail: &'static str,
    /// Urgency on the shared risk scale
    pub priority: RiskLevel,
}

impl Recommendation {
    const fn new(action: &'static str, detail: &'static str, priority: RiskLevel) -> Self {
        Self {
            action,
            detail,
            priority,
        }
    }
}

/// The fixed recommendation set for a glucose band
///
/// Entries come back in presentation order, most urgent first.
#[must_use]
pub fn recommendations_for(band: GlucoseBand) -> Vec<Recommendation> {
    match band {
        GlucoseBand::Diabetes => vec![
            Recommendation::new(
                "Konsultasi Medis Segera",
                "Buat janji dengan dokter dalam 1-2 minggu, lakukan pemeriksaan HbA1c, \
                 dan diskusikan kemungkinan perlu obat oral atau insulin",
                RiskLevel::High,
            ),
            Recommendation::new(
                "Manajemen Darurat",
                "Monitor gula darah 3-4 kali sehari dan waspadai gejala hiperglikemia",
                RiskLevel::High,
            ),
            Recommendation::new(
                "Perubahan Diet",
                "Konsultasi dengan ahli gizi, batasi karbohidrat di bawah 45% total \
                 kalori, dan hindari gula tambahan",
                RiskLevel::Medium,
            ),
            Recommendation::new(
                "Aktivitas Fisik",
                "Olahraga 150 menit per minggu dengan latihan kekuatan 2 kali seminggu",
                RiskLevel::Medium,
            ),
        ],
        GlucoseBand::Prediabetes => vec![
            Recommendation::new(
                "Intervensi Dini",
                "Konsultasi dokter untuk pencegahan progresi dan pemeriksaan lanjutan \
                 dalam 3-6 bulan",
                RiskLevel::Medium,
            ),
            Recommendation::new(
                "Modifikasi Gaya Hidup",
                "Turunkan 5-7% berat badan jika overweight dan tingkatkan aktivitas \
                 fisik ke 150 menit per minggu",
                RiskLevel::Medium,
            ),
            Recommendation::new(
                "Monitoring",
                "Cek gula darah 1-2 kali per minggu dan catat asupan makanan harian",
                RiskLevel::Medium,
            ),
            Recommendation::new(
                "Edukasi",
                "Ikuti program edukasi diabetes dan pelajari gejala serta faktor risiko",
                RiskLevel::Low,
            ),
        ],
        GlucoseBand::Normal => vec![
            Recommendation::new(
                "Pencegahan",
                "Pertahankan berat badan ideal dan lakukan medical check-up tahunan",
                RiskLevel::Low,
            ),
            Recommendation::new(
                "Gaya Hidup Sehat",
                "Konsumsi makanan seimbang, tetap aktif secara fisik, dan kelola stres",
                RiskLevel::Low,
            ),
            Recommendation::new(
                "Awareness",
                "Kenali gejala diabetes dini dan waspadai perubahan kesehatan",
                RiskLevel::Low,
            ),
        ],
    }
}
