use crate::domain::item::entity::Item;
use crate::domain::user::UserId;

/// Items are only visible and editable through their owner's account.
pub struct CanAccessItemSpec<'a> {
    item: &'a Item,
    user_id: UserId,
}

impl<'a> CanAccessItemSpec<'a> {
    pub fn new(item: &'a Item, user_id: UserId) -> Self {
        Self { item, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.item.is_owned_by(self.user_id)
    }
}
