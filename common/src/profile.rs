use api::profile::ProfileAttributes;
use chrono::{DateTime, NaiveDate};

// a phone number as the input hands it over: never reassembled from display text
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PhoneNumber {
    pub country_code: String,
    pub national_number: String,
}

impl PhoneNumber {
    // as typed: inputs bind to this, so nothing is trimmed while the user is typing
    pub fn new(country_code: &str, national_number: &str) -> Self {
        PhoneNumber {
            country_code: country_code.to_owned(),
            national_number: national_number.to_owned(),
        }
    }

    // without surrounding whitespace and without a leading '+' on the country code
    pub fn normalized(&self) -> Self {
        PhoneNumber {
            country_code: self.country_code.trim().trim_start_matches('+').to_owned(),
            national_number: self.national_number.trim().to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.national_number.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: PhoneNumber,
    // YYYY-MM-DD, as date inputs expect
    pub date_of_birth: String,
}

impl From<ProfileAttributes> for PersonalInfo {
    fn from(attrs: ProfileAttributes) -> Self {
        PersonalInfo {
            first_name: attrs.first_name.unwrap_or_default(),
            last_name: attrs.last_name.unwrap_or_default(),
            email: attrs.email.unwrap_or_default(),
            phone: PhoneNumber::new(
                attrs.phone_code.as_deref().unwrap_or_default(),
                attrs.phone.as_deref().unwrap_or_default(),
            )
            .normalized(),
            date_of_birth: attrs
                .date_of_birth
                .as_deref()
                .map(normalize_birth_date)
                .unwrap_or_default(),
        }
    }
}

// the api has returned plain dates, timestamps, and european dates at various points
pub fn normalize_birth_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }

    ["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_and_remainder(raw, fmt).ok())
        .map(|(date, _)| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_owned())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
}

// ProfileForm
//
// contact details for a booking.  signed-in users start from their stored profile in
// read-only mode and may opt into editing; guests always edit, starting blank.  nothing
// here is written back to the server
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    info: PersonalInfo,
    editable: bool,
    authenticated: bool,
}

impl ProfileForm {
    pub fn for_session(authenticated: bool) -> Self {
        ProfileForm {
            info: PersonalInfo::default(),
            editable: !authenticated,
            authenticated,
        }
    }

    pub fn apply_profile(&mut self, attrs: ProfileAttributes) {
        if !self.authenticated {
            return;
        }
        self.info = PersonalInfo::from(attrs);
    }

    // only signed-in users have something to toggle back to
    pub fn toggle_edit(&mut self) {
        if self.authenticated {
            self.editable = !self.editable;
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) -> bool {
        if !self.editable {
            return false;
        }

        match field {
            ProfileField::FirstName => self.info.first_name = value,
            ProfileField::LastName => self.info.last_name = value,
            ProfileField::Email => self.info.email = value,
            ProfileField::DateOfBirth => self.info.date_of_birth = value,
        }
        true
    }

    pub fn set_phone(&mut self, phone: PhoneNumber) -> bool {
        if !self.editable {
            return false;
        }
        self.info.phone = phone;
        true
    }

    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> ProfileAttributes {
        ProfileAttributes {
            first_name: Some(String::from("Ada")),
            last_name: None,
            email: Some(String::from("ada@example.com")),
            phone_code: Some(String::from("+49")),
            phone: Some(String::from("1512 3456789")),
            date_of_birth: Some(String::from("1990-04-01T00:00:00.000000Z")),
        }
    }

    #[test]
    fn guests_compose_from_blank_in_edit_mode() {
        let mut form = ProfileForm::for_session(false);

        assert!(form.is_editable());
        assert_eq!(form.info(), &PersonalInfo::default());

        form.apply_profile(attrs());
        assert_eq!(form.info(), &PersonalInfo::default());

        form.toggle_edit();
        assert!(form.is_editable());
    }

    #[test]
    fn signed_in_users_start_read_only_from_their_profile() {
        let mut form = ProfileForm::for_session(true);
        form.apply_profile(attrs());

        assert!(!form.is_editable());
        assert_eq!(form.info().first_name, "Ada");
        assert_eq!(form.info().last_name, "");
        assert_eq!(form.info().phone, PhoneNumber::new("49", "1512 3456789"));
        assert_eq!(form.info().date_of_birth, "1990-04-01");
        assert!(!form.set_field(ProfileField::FirstName, String::from("Eve")));
    }

    #[test]
    fn edits_apply_only_in_edit_mode() {
        let mut form = ProfileForm::for_session(true);
        form.toggle_edit();

        assert!(form.set_field(ProfileField::Email, String::from("eve@example.com")));
        assert!(form.set_phone(PhoneNumber::new("+43", " 660 1234567 ")));
        assert_eq!(form.info().email, "eve@example.com");
        assert_eq!(form.info().phone.normalized(), PhoneNumber::new("43", "660 1234567"));
    }

    #[test]
    fn phone_input_keeps_spaces_while_typing() {
        let mut form = ProfileForm::for_session(false);

        assert!(form.set_phone(PhoneNumber::new("+", "660 ")));
        assert_eq!(form.info().phone.national_number, "660 ");
        assert_eq!(form.info().phone.country_code, "+");

        assert!(form.set_phone(PhoneNumber::new("+43", "660 1")));
        assert_eq!(form.info().phone.national_number, "660 1");
    }

    #[test]
    fn birth_dates_normalize_to_iso() {
        assert_eq!(normalize_birth_date("1990-04-01"), "1990-04-01");
        assert_eq!(normalize_birth_date("1990-04-01 00:00:00"), "1990-04-01");
        assert_eq!(normalize_birth_date("01/04/1990"), "1990-04-01");
        assert_eq!(normalize_birth_date("01.04.1990"), "1990-04-01");
        assert_eq!(normalize_birth_date("2000-02-29T12:00:00+02:00"), "2000-02-29");
        assert_eq!(normalize_birth_date("someday"), "someday");
    }
}
