//! Plain-text rendering of console screens.

use amburoute_core::{directions_url, DriverSession};

use crate::emergency::EmergencyView;

pub(crate) const NOT_LOGGED_IN: &str = "no driver logged in; run `amburoute login` first";
pub(crate) const PERMISSION_REQUIRED: &str =
    "Location permission required: pass --lat and --lng, or use --offline";
pub(crate) const FETCH_FAILED: &str = "Could not fetch hospitals. Try again or use --offline.";
pub(crate) const NO_HOSPITALS: &str = "No verified emergency hospitals nearby.";

pub(crate) fn render_dashboard(driver: &DriverSession) -> String {
    [
        "Ambulance Driver Dashboard".to_string(),
        format!("  Driver:    {}", driver.name),
        format!("  Phone:     {}", driver.phone),
        format!("  Ambulance: {}", driver.ambulance_no),
        String::new(),
        "Run `amburoute emergency --lat <LAT> --lng <LNG>` to find hospitals.".to_string(),
    ]
    .join("\n")
}

pub(crate) fn render_emergency(driver: &DriverSession, view: &EmergencyView) -> String {
    let (origin, place, case_id, hospitals) = match view {
        EmergencyView::PermissionRequired => return PERMISSION_REQUIRED.to_string(),
        EmergencyView::FetchFailed => return FETCH_FAILED.to_string(),
        EmergencyView::Ranked {
            origin,
            place,
            case_id,
            hospitals,
        } => (origin, place, case_id, hospitals),
    };

    let mut lines = vec!["EMERGENCY MODE ACTIVE".to_string()];
    if let Some(case_id) = case_id {
        lines.push(format!("Case ID:   {case_id}"));
    }
    lines.push(format!("Ambulance: {} ({})", driver.ambulance_no, driver.name));
    lines.push(match place {
        Some(place) => format!("Location:  {place} ({origin})"),
        None => format!("Location:  {origin}"),
    });
    lines.push(String::new());

    if hospitals.is_empty() {
        lines.push(NO_HOSPITALS.to_string());
        return lines.join("\n");
    }

    for (rank, hospital) in hospitals.iter().enumerate() {
        let marker = if rank == 0 { "  [CLOSEST]" } else { "" };
        lines.push(format!("{}. {}{marker}", rank + 1, hospital.name));
        lines.push(format!(
            "   {:.2} km | ETA {} min | {}",
            hospital.distance_km, hospital.eta_min, hospital.status
        ));
        if let Some(address) = &hospital.address {
            lines.push(format!("   {address}"));
        }
        if let Some(phone) = &hospital.phone {
            lines.push(format!("   Phone: {phone}"));
        }
        if let Some(services) = &hospital.services {
            lines.push(format!("   Services: {services}"));
        }
        if hospital.can_navigate() {
            lines.push(format!(
                "   Navigate: {}",
                directions_url(*origin, hospital.position)
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use amburoute_core::sample::{sample_records, DEMO_ORIGIN};
    use amburoute_core::{rank_hospitals, RankingProfile};
    use serde_json::json;

    fn driver() -> DriverSession {
        DriverSession::new("Ravi", "9840012345", "TN-01-AB-1234").unwrap()
    }

    #[test]
    fn dashboard_shows_driver_details() {
        let out = render_dashboard(&driver());
        assert!(out.contains("Ravi"));
        assert!(out.contains("9840012345"));
        assert!(out.contains("TN-01-AB-1234"));
        assert!(out.starts_with("Ambulance Driver Dashboard\n"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn permission_and_fetch_failures_render_fixed_messages() {
        assert_eq!(
            render_emergency(&driver(), &EmergencyView::PermissionRequired),
            PERMISSION_REQUIRED
        );
        assert_eq!(
            render_emergency(&driver(), &EmergencyView::FetchFailed),
            FETCH_FAILED
        );
    }

    #[test]
    fn empty_ranking_renders_no_hospitals_message() {
        let view = EmergencyView::Ranked {
            origin: DEMO_ORIGIN,
            place: None,
            case_id: None,
            hospitals: Vec::new(),
        };
        assert!(render_emergency(&driver(), &view).ends_with(NO_HOSPITALS));
    }

    #[test]
    fn offline_ranking_marks_closest_and_shows_case() {
        let hospitals = rank_hospitals(&sample_records(), DEMO_ORIGIN, &RankingProfile::offline());
        let view = EmergencyView::Ranked {
            origin: DEMO_ORIGIN,
            place: Some("Nungambakkam, Chennai".to_string()),
            case_id: Some("EMG-1700000000123-7".to_string()),
            hospitals,
        };
        let out = render_emergency(&driver(), &view);

        assert!(out.contains("Case ID:   EMG-1700000000123-7"));
        assert!(out.contains("Nungambakkam, Chennai"));
        assert!(out.contains("1. St. Mary's Medical Center  [CLOSEST]"));
        assert!(out.contains("0.00 km | ETA 1 min | EMERGENCY AVAILABLE"));
        assert_eq!(out.matches("[CLOSEST]").count(), 1);
        assert_eq!(out.matches("Navigate: ").count(), 6);
    }

    #[test]
    fn hospital_without_emergency_has_no_navigation() {
        let records = vec![json!({
            "name": "Day Clinic",
            "lat": 13.07,
            "lng": 80.24,
            "emergency": false
        })];
        let hospitals = rank_hospitals(&records, DEMO_ORIGIN, &RankingProfile::live());
        let view = EmergencyView::Ranked {
            origin: DEMO_ORIGIN,
            place: None,
            case_id: None,
            hospitals,
        };
        let out = render_emergency(&driver(), &view);
        assert!(out.contains("NO EMERGENCY"));
        assert!(!out.contains("Navigate: "));
    }
}
