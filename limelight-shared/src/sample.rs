//! The bundled sample catalog.
//!
//! Every view except accounts renders this in-memory data; nothing here is
//! persisted or fetched. Timestamps are offsets from the current clock so
//! relative-time labels stay plausible.

use chrono::{Duration, Utc};

use crate::models::{Chat, ExtractedProduct, Message, Product, PromptTemplate, Supplier};

/// The designer-handbag product catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    let now = Utc::now();
    let entry = |days_ago: i64| now - Duration::days(days_ago);

    vec![
        Product {
            id: 1,
            name: "Birkin 30".to_string(),
            brand: "Hermès".to_string(),
            kind: "Tote".to_string(),
            price: "$15,900".to_string(),
            description: Some(
                "Black Togo leather with gold hardware. Excellent condition, minimal wear."
                    .to_string(),
            ),
            color: Some("Black".to_string()),
            material: Some("Togo Leather".to_string()),
            condition: Some("Excellent".to_string()),
            hardware: Some("Gold".to_string()),
            source_chat: Some("Luxury Supplier".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(0),
        },
        Product {
            id: 2,
            name: "Classic Flap Medium".to_string(),
            brand: "Chanel".to_string(),
            kind: "Shoulder Bag".to_string(),
            price: "$8,800".to_string(),
            description: Some(
                "Black caviar leather with silver hardware. Quilted pattern and iconic CC lock."
                    .to_string(),
            ),
            color: Some("Black".to_string()),
            material: Some("Caviar Leather".to_string()),
            condition: Some("Very Good".to_string()),
            hardware: Some("Silver".to_string()),
            source_chat: Some("Paris Connection".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=500&h=350".to_string(),
            ),
            created_at: entry(1),
        },
        Product {
            id: 3,
            name: "Saddle Bag".to_string(),
            brand: "Dior".to_string(),
            kind: "Shoulder Bag".to_string(),
            price: "$3,950".to_string(),
            description: Some(
                "Blue Oblique canvas with antique gold-finish metal details. Adjustable shoulder strap."
                    .to_string(),
            ),
            color: Some("Blue".to_string()),
            material: Some("Oblique Canvas".to_string()),
            condition: Some("Excellent".to_string()),
            hardware: Some("Antique Gold".to_string()),
            source_chat: Some("Milano Boutique".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1566150905458-1bf1fc113f0d?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(2),
        },
        Product {
            id: 4,
            name: "Neverfull MM".to_string(),
            brand: "Louis Vuitton".to_string(),
            kind: "Tote".to_string(),
            price: "$1,960".to_string(),
            description: Some(
                "Damier Ebene canvas with cherry lining. Versatile tote with side laces."
                    .to_string(),
            ),
            color: Some("Brown".to_string()),
            material: Some("Damier Ebene Canvas".to_string()),
            condition: Some("Good".to_string()),
            hardware: Some("Brass".to_string()),
            source_chat: Some("Paris Connection".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1604782206219-3b9d4b6b9bd1?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(3),
        },
        Product {
            id: 5,
            name: "Dionysus Small".to_string(),
            brand: "Gucci".to_string(),
            kind: "Shoulder Bag".to_string(),
            price: "$2,550".to_string(),
            description: Some(
                "GG Supreme canvas with black suede details. Tiger head closure with crystals."
                    .to_string(),
            ),
            color: Some("Beige/Ebony".to_string()),
            material: Some("GG Supreme Canvas".to_string()),
            condition: Some("Excellent".to_string()),
            hardware: Some("Antiqued Silver".to_string()),
            source_chat: Some("Milano Boutique".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1610374792793-f016b77ca51a?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(4),
        },
        Product {
            id: 6,
            name: "Lady Dior Medium".to_string(),
            brand: "Dior".to_string(),
            kind: "Handbag".to_string(),
            price: "$5,300".to_string(),
            description: Some(
                "Black lambskin with Cannage stitching. Silver-tone charms and detachable strap."
                    .to_string(),
            ),
            color: Some("Black".to_string()),
            material: Some("Lambskin".to_string()),
            condition: Some("Pristine".to_string()),
            hardware: Some("Silver".to_string()),
            source_chat: Some("Paris Connection".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(5),
        },
        Product {
            id: 7,
            name: "Sylvie Small".to_string(),
            brand: "Gucci".to_string(),
            kind: "Shoulder Bag".to_string(),
            price: "$2,650".to_string(),
            description: Some(
                "Smooth leather with signature Web stripe and gold-toned chain strap.".to_string(),
            ),
            color: Some("Red".to_string()),
            material: Some("Smooth Leather".to_string()),
            condition: Some("Very Good".to_string()),
            hardware: Some("Gold".to_string()),
            source_chat: Some("Milano Boutique".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1590739225294-502879d1e952?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(6),
        },
        Product {
            id: 8,
            name: "Puzzle Small".to_string(),
            brand: "Loewe".to_string(),
            kind: "Crossbody".to_string(),
            price: "$2,900".to_string(),
            description: Some(
                "Tan calfskin leather. Folding design that allows it to lay completely flat."
                    .to_string(),
            ),
            color: Some("Tan".to_string()),
            material: Some("Calfskin".to_string()),
            condition: Some("Excellent".to_string()),
            hardware: Some("Gold".to_string()),
            source_chat: Some("Luxury Supplier".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1591561954557-26941169b49e?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(7),
        },
        Product {
            id: 9,
            name: "Peekaboo Medium".to_string(),
            brand: "Fendi".to_string(),
            kind: "Satchel".to_string(),
            price: "$4,200".to_string(),
            description: Some(
                "Black leather with contrasting interior. Turn-lock fastening and top handle."
                    .to_string(),
            ),
            color: Some("Black".to_string()),
            material: Some("Nappa Leather".to_string()),
            condition: Some("Very Good".to_string()),
            hardware: Some("Palladium".to_string()),
            source_chat: Some("Milano Boutique".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1592500453369-9f4e08fbfa6f?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(8),
        },
        Product {
            id: 10,
            name: "Kelly 28".to_string(),
            brand: "Hermès".to_string(),
            kind: "Handbag".to_string(),
            price: "$12,500".to_string(),
            description: Some(
                "Rouge H Epsom leather with palladium hardware. Classic trapezoid shape."
                    .to_string(),
            ),
            color: Some("Rouge H".to_string()),
            material: Some("Epsom Leather".to_string()),
            condition: Some("Pristine".to_string()),
            hardware: Some("Palladium".to_string()),
            source_chat: Some("Luxury Supplier".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1595950653613-ab04d5e0481f?w=500&h=350"
                    .to_string(),
            ),
            created_at: entry(9),
        },
    ]
}

/// The supplier contact list.
#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "Luxury Supplier".to_string(),
            specialty: Some("Hermès Specialist".to_string()),
            location: Some("Paris, France".to_string()),
            phone_number: "+33 6 12 34 56 78".to_string(),
            status: "Active".to_string(),
            product_count: 4,
        },
        Supplier {
            id: 2,
            name: "Paris Connection".to_string(),
            specialty: Some("Multi-brand Dealer".to_string()),
            location: Some("Paris, France".to_string()),
            phone_number: "+33 7 98 76 54 32".to_string(),
            status: "Active".to_string(),
            product_count: 3,
        },
        Supplier {
            id: 3,
            name: "Milano Boutique".to_string(),
            specialty: Some("Italian Luxury".to_string()),
            location: Some("Milan, Italy".to_string()),
            phone_number: "+39 333 123 4567".to_string(),
            status: "Active".to_string(),
            product_count: 2,
        },
        Supplier {
            id: 4,
            name: "Hong Kong Dealer".to_string(),
            specialty: Some("Asian Market".to_string()),
            location: Some("Hong Kong".to_string()),
            phone_number: "+852 9876 5432".to_string(),
            status: "Pending".to_string(),
            product_count: 1,
        },
    ]
}

/// The monitored chat list.
#[must_use]
pub fn chats() -> Vec<Chat> {
    let now = Utc::now();

    vec![
        Chat {
            id: 1,
            account_id: 1,
            name: "Luxury Supplier".to_string(),
            phone_number: "+33 6 12 34 56 78".to_string(),
            is_subscribed: true,
            prompt: Some(
                "Extract product name, brand, type, size, color, material, condition, and price \
                 from all messages. Include additional details like hardware type if available."
                    .to_string(),
            ),
            last_message: Some("New Birkin 30 available in Noir, Gold hardware...".to_string()),
            last_message_at: Some(now - Duration::hours(2)),
            avatar: Some("LS".to_string()),
        },
        Chat {
            id: 2,
            account_id: 1,
            name: "Paris Connection".to_string(),
            phone_number: "+33 7 98 76 54 32".to_string(),
            is_subscribed: true,
            prompt: Some("Extract product information and pricing details from all messages.".to_string()),
            last_message: Some(
                "Lady Dior in black lambskin, medium size, amazing condition...".to_string(),
            ),
            last_message_at: Some(now - Duration::hours(5)),
            avatar: Some("PC".to_string()),
        },
        Chat {
            id: 3,
            account_id: 1,
            name: "Milano Boutique".to_string(),
            phone_number: "+39 333 123 4567".to_string(),
            is_subscribed: false,
            prompt: None,
            last_message: Some(
                "Limited edition Saddle bag from Dior now in stock...".to_string(),
            ),
            last_message_at: Some(now - Duration::days(1)),
            avatar: Some("MB".to_string()),
        },
        Chat {
            id: 4,
            account_id: 2,
            name: "Hong Kong Dealer".to_string(),
            phone_number: "+852 9876 5432".to_string(),
            is_subscribed: false,
            prompt: None,
            last_message: Some(
                "Chanel Classic Flap Medium, pristine condition, comes with all...".to_string(),
            ),
            last_message_at: Some(now - Duration::days(2)),
            avatar: Some("HK".to_string()),
        },
    ]
}

/// Recent messages shown in the chat detail panel.
#[must_use]
pub fn messages(chat_id: i64) -> Vec<Message> {
    let now = Utc::now();

    vec![
        Message {
            id: 1,
            chat_id,
            content: "Hello! I have a new Birkin 30 available. Black Togo leather with gold \
                      hardware. Pristine condition, still has plastic on the hardware. Price is \
                      $15,900."
                .to_string(),
            is_sent_by_me: false,
            sent_at: now - Duration::minutes(60),
        },
        Message {
            id: 2,
            chat_id,
            content: "That sounds interesting. Do you have any photos of the bag?".to_string(),
            is_sent_by_me: true,
            sent_at: now - Duration::minutes(58),
        },
        Message {
            id: 3,
            chat_id,
            content: "Yes, here you go. The bag comes with all original packaging, box, dustbag, \
                      and receipt."
                .to_string(),
            is_sent_by_me: false,
            sent_at: now - Duration::minutes(55),
        },
    ]
}

/// Reusable extraction prompts.
#[must_use]
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            id: 1,
            name: "Product Extraction".to_string(),
            content: "Extract product name, brand, type, size, color, material, and price from \
                      messages."
                .to_string(),
        },
        PromptTemplate {
            id: 2,
            name: "Price Negotiation".to_string(),
            content: "Analyze price negotiations and extract initial price, final price, and \
                      discount percentage."
                .to_string(),
        },
    ]
}

/// The canned extraction result the Process Now demo shows.
#[must_use]
pub fn extracted_demo() -> ExtractedProduct {
    ExtractedProduct {
        product_name: "Birkin 30".to_string(),
        brand: "Hermès".to_string(),
        material: "Togo Leather".to_string(),
        color: "Black".to_string(),
        hardware: "Gold".to_string(),
        condition: "Pristine".to_string(),
        price: "$15,900".to_string(),
        includes: "Box, Dustbag, Receipt".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_counts() {
        assert_eq!(products().len(), 10);
        assert_eq!(suppliers().len(), 4);
        assert_eq!(chats().len(), 4);
        assert_eq!(prompt_templates().len(), 2);
    }

    #[test]
    fn product_ids_are_unique() {
        let mut ids: Vec<i64> = products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn messages_belong_to_requested_chat() {
        assert!(messages(3).iter().all(|m| m.chat_id == 3));
    }

    #[test]
    fn newest_product_is_first_entry() {
        let catalog = products();
        let newest = catalog
            .iter()
            .max_by_key(|product| product.created_at)
            .unwrap();
        assert_eq!(newest.id, 1);
    }
}
