use shared::domain::{Room, RoomId};

fn room(
    id: &str,
    room_type: &str,
    price_per_night: u32,
    capacity: u32,
    amenities: &[&str],
    description: &str,
) -> Room {
    Room {
        id: RoomId::from(id),
        room_type: room_type.to_string(),
        type_id: room_type.to_string(),
        price_per_night,
        capacity,
        amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
        images: vec![
            format!("/images/rooms/{id}-1.jpg"),
            format!("/images/rooms/{id}-2.jpg"),
            format!("/images/rooms/{id}-3.jpg"),
        ],
        description: description.to_string(),
        availability: true,
    }
}

/// The static room inventory. Rooms are never fetched from anywhere; this
/// seed is the catalog.
pub fn rooms() -> Vec<Room> {
    vec![
        room(
            "room-1",
            "Single Room",
            120,
            1,
            &["Free WiFi", "Smart TV", "Air Conditioning"],
            "A cozy single room with a city view, ideal for solo travellers.",
        ),
        room(
            "room-2",
            "Single Room",
            95,
            1,
            &["Free WiFi", "Work Desk"],
            "Compact and quiet, tucked away on the garden side of the hotel.",
        ),
        room(
            "room-3",
            "Single Room",
            150,
            2,
            &["Free WiFi", "Smart TV", "Mini Bar"],
            "A premium single with a queen bed and a reading corner.",
        ),
        room(
            "room-4",
            "Double Room",
            180,
            2,
            &["Free WiFi", "Smart TV", "Balcony"],
            "Spacious double room overlooking the courtyard fountain.",
        ),
        room(
            "room-5",
            "Double Room",
            220,
            3,
            &["Free WiFi", "Smart TV", "Bathtub", "Mini Bar"],
            "Our most requested double, with a king bed and marble bath.",
        ),
        room(
            "room-6",
            "Double Room",
            260,
            4,
            &["Free WiFi", "Smart TV", "Kitchenette"],
            "A family-friendly double with a sofa bed and kitchenette.",
        ),
        room(
            "room-7",
            "Suite",
            350,
            2,
            &["Free WiFi", "Smart TV", "Living Area", "Espresso Machine"],
            "Junior suite with a separate living area and skyline views.",
        ),
        room(
            "room-8",
            "Suite",
            480,
            4,
            &["Free WiFi", "Smart TV", "Living Area", "Bathtub", "Balcony"],
            "Two-room suite with a wraparound balcony above the plaza.",
        ),
        room(
            "room-9",
            "Suite",
            650,
            4,
            &["Free WiFi", "Smart TV", "Private Terrace", "Butler Service"],
            "The signature LuxeStay suite, with a private rooftop terrace.",
        ),
    ]
}
