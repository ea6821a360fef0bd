use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// One fundraising effort as the backend returns it.
///
/// `amount_raised` is maintained by the backend as the sum of the recorded
/// donations; the client only re-derives it for display.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub country: String,
    pub zip_code: String,
    pub recipient: String,
    pub goal: f64,
    pub amount_raised: f64,
    pub status: CampaignStatus,
    pub created_username: String,
    pub created_user_email: String,
    #[serde(default)]
    pub donations: Vec<Donation>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Approval state of a campaign. New campaigns always start as `Pending`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CampaignStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CampaignStatus::Pending => write!(f, "Pending"),
            CampaignStatus::Approved => write!(f, "Approved"),
            CampaignStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// One recorded donation. Append-only: the client never edits or removes
/// entries.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub donor_name: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// One comment in a campaign's thread. Append-only.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub name: String,
    pub comment: String,
    pub created_on: DateTime<Utc>,
}

/// Payload for `POST /campaigns/create`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub country: String,
    pub zip_code: String,
    pub recipient: String,
    pub goal: f64,
    pub status: CampaignStatus,
    pub created_username: String,
    pub created_user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub agreement_accepted: bool,
}

impl NewCampaign {
    /// Mirror of the submission form check: every field present, a positive
    /// goal, terms accepted. Runs before any network call.
    pub fn validate(&self) -> Result<()> {
        required(&self.title, "title")?;
        required(&self.description, "description")?;
        required(&self.country, "country")?;
        required(&self.zip_code, "zip code")?;
        required(&self.recipient, "recipient")?;
        if !(self.goal > 0.0) {
            return Err(ClientError::Validation(
                "goal must be a positive amount".to_string(),
            ));
        }
        if !self.agreement_accepted {
            return Err(ClientError::Validation(
                "the terms agreement must be accepted (pass --agree)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payload for `POST /campaigns/donate/{id}`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_name: String,
    pub amount: f64,
}

impl NewDonation {
    pub fn validate(&self) -> Result<()> {
        if !(self.amount > 0.0) {
            return Err(ClientError::Validation(
                "donation amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payload for `POST /campaigns/comment/{id}`.
#[derive(Serialize, Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub comment: String,
}

fn required(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewCampaign {
        NewCampaign {
            title: "Rebuild the shelter".to_string(),
            description: "Storm damage repairs".to_string(),
            country: "US".to_string(),
            zip_code: "02139".to_string(),
            recipient: "Cambridge Animal Shelter".to_string(),
            goal: 5000.0,
            status: CampaignStatus::Pending,
            created_username: "Ada".to_string(),
            created_user_email: "a@x.com".to_string(),
            image: None,
            agreement_accepted: true,
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let mut campaign = form();
        campaign.recipient = "  ".to_string();
        assert!(matches!(
            campaign.validate(),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_goal() {
        let mut campaign = form();
        campaign.goal = 0.0;
        assert!(campaign.validate().is_err());
        campaign.goal = -10.0;
        assert!(campaign.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_agreement() {
        let mut campaign = form();
        campaign.agreement_accepted = false;
        assert!(matches!(
            campaign.validate(),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_donation_validate() {
        let donation = NewDonation {
            donor_name: "Anonymous".to_string(),
            amount: 0.0,
        };
        assert!(donation.validate().is_err());
        let donation = NewDonation {
            amount: 25.0,
            ..donation
        };
        assert!(donation.validate().is_ok());
    }

    #[test]
    fn test_campaign_deserializes_backend_record() {
        let json = r#"{
            "_id": "66b2f8c1",
            "title": "Rebuild the shelter",
            "description": "Storm damage repairs",
            "country": "US",
            "zipCode": "02139",
            "recipient": "Cambridge Animal Shelter",
            "goal": 5000,
            "amountRaised": 150,
            "status": "Pending",
            "createdUsername": "Ada",
            "createdUserEmail": "a@x.com",
            "donations": [
                {"donorName": "Grace", "amount": 100, "date": "2024-06-01T12:00:00Z"},
                {"donorName": "Anonymous", "amount": 50, "date": "2024-06-02T09:30:00Z"}
            ]
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.id, "66b2f8c1");
        assert_eq!(campaign.status, CampaignStatus::Pending);
        assert_eq!(campaign.donations.len(), 2);
        assert_eq!(campaign.donations[0].donor_name, "Grace");
        assert!(campaign.image.is_none());
    }

    #[test]
    fn test_campaign_rejects_wrong_shape() {
        // A record with no goal must fail loudly, not default to zero.
        let json = r#"{"_id": "66b2f8c1", "title": "Rebuild the shelter"}"#;
        assert!(serde_json::from_str::<Campaign>(json).is_err());
    }

    #[test]
    fn test_new_campaign_serializes_pending_status() {
        let value = serde_json::to_value(form()).unwrap();
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["zipCode"], "02139");
        assert_eq!(value["agreementAccepted"], true);
        assert!(value.get("image").is_none());
    }
}
