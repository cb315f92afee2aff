//! request and response bodies. inbound shapes carry their own syntactic constraints, checked
//! with [`validator::Validate`] before anything touches the database

use crate::model;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct JobOut {
	pub id: i64,
	pub title: String,
	pub department: String,
	pub description: Option<String>,
	pub is_active: bool,
}

impl From<model::job::Model> for JobOut {
	fn from(value: model::job::Model) -> Self {
		JobOut {
			id: value.id,
			title: value.title,
			department: value.department,
			description: value.description,
			is_active: value.is_active,
		}
	}
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate)]
pub struct ApplicationCreate {
	#[validate(range(min = 1))]
	/// job being applied to
	pub job_id: i64,

	#[validate(length(min = 1, max = 200))]
	/// candidate full name
	pub candidate_name: String,

	#[validate(email, length(max = 254))]
	pub email: String,

	#[serde(default)]
	#[validate(length(max = 500))]
	/// where the resume was uploaded, just a path: no file is ever read
	pub resume_file_path: Option<String>,

	#[serde(default)]
	#[validate(length(max = 5000))]
	pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationOut {
	pub id: i64,
	pub job_id: i64,
	pub candidate_name: String,
	pub email: String,
	pub resume_file_path: Option<String>,
	pub cover_letter: Option<String>,
	pub submitted_date: chrono::NaiveDateTime,
}

impl From<model::application::Model> for ApplicationOut {
	fn from(value: model::application::Model) -> Self {
		ApplicationOut {
			id: value.id,
			job_id: value.job_id,
			candidate_name: value.candidate_name,
			email: value.email,
			resume_file_path: value.resume_file_path,
			cover_letter: value.cover_letter,
			submitted_date: value.submitted_date,
		}
	}
}

#[cfg(test)]
mod test {
	use validator::Validate;

	use super::ApplicationCreate;

	fn valid() -> ApplicationCreate {
		ApplicationCreate {
			job_id: 1,
			candidate_name: "Alice".to_string(),
			email: "alice@example.com".to_string(),
			resume_file_path: Some("C:/resumes/alice.pdf".to_string()),
			cover_letter: Some("I am interested".to_string()),
		}
	}

	fn rejected_fields(input: ApplicationCreate) -> Vec<String> {
		input.validate()
			.expect_err("input should not validate")
			.field_errors()
			.keys()
			.map(|k| k.to_string())
			.collect()
	}

	#[test]
	fn well_formed_application_validates() {
		assert!(valid().validate().is_ok());
		let minimal = ApplicationCreate { resume_file_path: None, cover_letter: None, ..valid() };
		assert!(minimal.validate().is_ok());
	}

	#[test]
	fn empty_candidate_name_is_rejected() {
		let input = ApplicationCreate { candidate_name: String::new(), ..valid() };
		assert_eq!(rejected_fields(input), vec!["candidate_name"]);
	}

	#[test]
	fn candidate_name_length_counts_chars() {
		let input = ApplicationCreate { candidate_name: "é".repeat(200), ..valid() };
		assert!(input.validate().is_ok());
		let input = ApplicationCreate { candidate_name: "a".repeat(201), ..valid() };
		assert_eq!(rejected_fields(input), vec!["candidate_name"]);
	}

	#[test]
	fn malformed_email_is_rejected() {
		for email in ["not-an-email", "alice@", "@example.com", ""] {
			let input = ApplicationCreate { email: email.to_string(), ..valid() };
			assert_eq!(rejected_fields(input), vec!["email"], "accepted {email:?}");
		}
	}

	#[test]
	fn job_id_must_be_positive() {
		for job_id in [0, -1] {
			let input = ApplicationCreate { job_id, ..valid() };
			assert_eq!(rejected_fields(input), vec!["job_id"]);
		}
	}

	#[test]
	fn long_cover_letter_is_rejected() {
		let input = ApplicationCreate { cover_letter: Some("x".repeat(5000)), ..valid() };
		assert!(input.validate().is_ok());
		let input = ApplicationCreate { cover_letter: Some("x".repeat(5001)), ..valid() };
		assert_eq!(rejected_fields(input), vec!["cover_letter"]);
	}

	#[test]
	fn long_resume_path_is_rejected() {
		let input = ApplicationCreate { resume_file_path: Some("r".repeat(501)), ..valid() };
		assert_eq!(rejected_fields(input), vec!["resume_file_path"]);
	}

	#[test]
	fn missing_optional_fields_deserialize_as_none() {
		let input: ApplicationCreate = serde_json::from_str(
			r#"{"job_id": 3, "candidate_name": "Bob", "email": "bob@example.com"}"#
		).unwrap();
		assert_eq!(input.resume_file_path, None);
		assert_eq!(input.cover_letter, None);
	}

	#[test]
	fn missing_required_field_fails_deserialization() {
		let res = serde_json::from_str::<ApplicationCreate>(r#"{"candidate_name": "Bob"}"#);
		assert!(res.is_err());
	}
}
