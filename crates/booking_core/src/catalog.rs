use shared::domain::{FilterUpdate, Room, RoomFilters, RoomId, RoomTypeFilter};

pub const DEFAULT_ROOMS_PER_PAGE: usize = 6;

/// Room catalog slice: the fixed inventory plus the active filter, selection
/// and page. Filtered and paginated views are recomputed on read from this
/// canonical state, so availability flips can never leave a stale copy behind.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub rooms: Vec<Room>,
    pub filters: RoomFilters,
    pub selected_room: Option<RoomId>,
    /// 1-based; the store performs no bounds validation.
    pub current_page: usize,
    pub rooms_per_page: usize,
}

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    SetFilters(FilterUpdate),
    SetSelectedRoom(Option<RoomId>),
    SetCurrentPage(usize),
    SetAvailability { room_id: RoomId, available: bool },
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_ROOMS_PER_PAGE)
    }
}

impl CatalogState {
    pub fn new(rooms: Vec<Room>, rooms_per_page: usize) -> Self {
        Self {
            rooms,
            filters: RoomFilters::default(),
            selected_room: None,
            current_page: 1,
            // Page size zero would make the page arithmetic divide by zero.
            rooms_per_page: rooms_per_page.max(1),
        }
    }

    pub fn apply(mut self, intent: CatalogIntent) -> Self {
        match intent {
            CatalogIntent::SetFilters(update) => {
                if let Some(price_range) = update.price_range {
                    self.filters.price_range = price_range;
                }
                if let Some(room_type) = update.room_type {
                    self.filters.room_type = room_type;
                }
                // Every filter change restarts at the first page.
                self.current_page = 1;
            }
            CatalogIntent::SetSelectedRoom(room_id) => {
                self.selected_room =
                    room_id.filter(|id| self.rooms.iter().any(|room| &room.id == id));
            }
            CatalogIntent::SetCurrentPage(page) => {
                self.current_page = page;
            }
            CatalogIntent::SetAvailability { room_id, available } => {
                if let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id) {
                    room.availability = available;
                }
            }
        }
        self
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.selected_room.as_ref().and_then(|id| self.room(id))
    }

    pub fn filtered_rooms(&self) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| matches_filters(room, &self.filters))
            .collect()
    }

    /// The slice of the filtered list visible on the current page,
    /// `[(page-1)*size, page*size)` clipped to the available length.
    pub fn visible_rooms(&self) -> Vec<&Room> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.rooms_per_page);
        self.filtered_rooms()
            .into_iter()
            .skip(start)
            .take(self.rooms_per_page)
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_rooms().len().div_ceil(self.rooms_per_page)
    }
}

fn matches_filters(room: &Room, filters: &RoomFilters) -> bool {
    let (lo, hi) = filters.price_range;
    let price_match = room.price_per_night >= lo && room.price_per_night <= hi;
    let type_match = match &filters.room_type {
        RoomTypeFilter::All => true,
        RoomTypeFilter::Type(type_id) => &room.type_id == type_id,
    };
    price_match && type_match
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
