/// Treatment requested on the appointment form. The form submits a short
/// code; the email template wants the human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Service {
    General,
    Cleaning,
    Cosmetic,
    RootCanal,
    Implants,
    Emergency,
    /// Codes the lookup table doesn't know pass through verbatim.
    Other(String),
}

impl Service {
    pub fn from_code(code: &str) -> Self {
        match code {
            "general" => Service::General,
            "cleaning" => Service::Cleaning,
            "cosmetic" => Service::Cosmetic,
            "root-canal" => Service::RootCanal,
            "implants" => Service::Implants,
            "emergency" => Service::Emergency,
            other => Service::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Service::General => "general",
            Service::Cleaning => "cleaning",
            Service::Cosmetic => "cosmetic",
            Service::RootCanal => "root-canal",
            Service::Implants => "implants",
            Service::Emergency => "emergency",
            Service::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Service::General => "General Checkup",
            Service::Cleaning => "Teeth Cleaning",
            Service::Cosmetic => "Cosmetic Consultation",
            Service::RootCanal => "Root Canal Treatment",
            Service::Implants => "Dental Implants",
            Service::Emergency => "Emergency Visit",
            Service::Other(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_maps_to_label() {
        assert_eq!(Service::from_code("general").label(), "General Checkup");
        assert_eq!(Service::from_code("root-canal").label(), "Root Canal Treatment");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let service = Service::from_code("xyz");
        assert_eq!(service, Service::Other("xyz".to_string()));
        assert_eq!(service.label(), "xyz");
        assert_eq!(service.code(), "xyz");
    }
}
