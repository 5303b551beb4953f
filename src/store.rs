//! Campaign list, newest first

use crate::api::types::Campaign;
use parking_lot::RwLock;
use std::collections::VecDeque;

/// Ordered campaigns as returned and created during the session.
///
/// Nothing is deduplicated; the order reflects the API calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignList {
    campaigns: VecDeque<Campaign>,
}

impl CampaignList {
    pub fn new() -> Self {
        Self::default()
    }

    /// New list with `campaign` at the head
    pub fn prepend(mut self, campaign: Campaign) -> Self {
        self.campaigns.push_front(campaign);
        self
    }

    pub fn head(&self) -> Option<&Campaign> {
        self.campaigns.front()
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Campaign> {
        self.campaigns.iter()
    }

    pub fn all(&self) -> Vec<Campaign> {
        self.campaigns.iter().cloned().collect()
    }
}

impl From<Vec<Campaign>> for CampaignList {
    fn from(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns: campaigns.into(),
        }
    }
}

impl FromIterator<Campaign> for CampaignList {
    fn from_iter<I: IntoIterator<Item = Campaign>>(iter: I) -> Self {
        Self {
            campaigns: iter.into_iter().collect(),
        }
    }
}

/// Session owner of the campaign list
#[derive(Debug, Default)]
pub struct CampaignStore {
    list: RwLock<CampaignList>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a freshly created campaign at the head, returns the new length
    pub fn prepend(&self, campaign: Campaign) -> usize {
        let mut list = self.list.write();
        *list = std::mem::take(&mut *list).prepend(campaign);
        list.len()
    }

    /// Swap in the list fetched on load
    pub fn replace_all(&self, campaigns: Vec<Campaign>) -> usize {
        let mut list = self.list.write();
        *list = CampaignList::from(campaigns);
        list.len()
    }

    pub fn all(&self) -> Vec<Campaign> {
        self.list.read().all()
    }

    pub fn snapshot(&self) -> CampaignList {
        self.list.read().clone()
    }

    pub fn head(&self) -> Option<Campaign> {
        self.list.read().head().cloned()
    }

    pub fn len(&self) -> usize {
        self.list.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().is_empty()
    }
}
