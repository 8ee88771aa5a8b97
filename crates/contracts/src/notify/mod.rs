use serde::{Deserialize, Serialize};

/// Preferências de notificação do gestor. Stored per manager; a missing
/// document reads back as the all-disabled default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    #[serde(default)]
    pub sms_enabled: bool,
    #[serde(default)]
    pub sms_number: String,
    #[serde(default)]
    pub email_enabled: bool,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub whatsapp_enabled: bool,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub whatsapp_autopopulate: bool,
}

impl NotificationPrefs {
    /// WhatsApp number mirrors the SMS number while autopopulate is on and
    /// an SMS number exists; otherwise the stored WhatsApp number stands.
    pub fn effective_whatsapp_number(&self) -> &str {
        if self.whatsapp_autopopulate && !self.sms_number.is_empty() {
            &self.sms_number
        } else {
            &self.whatsapp_number
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autopopulate_mirrors_sms_number() {
        let prefs = NotificationPrefs {
            sms_enabled: true,
            sms_number: "+55 71 99999-0000".into(),
            whatsapp_enabled: true,
            whatsapp_number: "+55 71 88888-1111".into(),
            whatsapp_autopopulate: true,
            ..Default::default()
        };
        assert_eq!(prefs.effective_whatsapp_number(), "+55 71 99999-0000");
    }

    #[test]
    fn empty_sms_number_keeps_own_whatsapp() {
        let prefs = NotificationPrefs {
            whatsapp_number: "+55 71 88888-1111".into(),
            whatsapp_autopopulate: true,
            ..Default::default()
        };
        assert_eq!(prefs.effective_whatsapp_number(), "+55 71 88888-1111");
    }

    #[test]
    fn missing_fields_deserialize_as_defaults() {
        let prefs: NotificationPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, NotificationPrefs::default());
    }
}
