//! Built-in schema types

use serde_json::json;

use crate::catalog::SchemaTypeConfig;
use crate::field::{FieldDescriptor as Field, FieldKind, ValueShape};

const CONTEXT: &str = "https://schema.org";

pub(crate) fn schema_types() -> Vec<SchemaTypeConfig> {
    vec![
        organization(),
        article(),
        product(),
        event(),
        person(),
        webpage(),
        local_business(),
        profile_page(),
        news_article(),
    ]
}

fn organization() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "organization".to_string(),
        label: "Organization".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "Organization",
            "name": "Your Organization Name",
            "url": "https://example.com",
            "logo": "https://example.com/logo.png"
        }),
        fields: vec![
            Field::new("orgName", "Organization Name", FieldKind::Text, "name")
                .placeholder("e.g., Google LLC"),
            Field::new("orgUrl", "Website URL", FieldKind::Url, "url")
                .placeholder("e.g., https://www.google.com"),
            Field::new("orgLogo", "Logo URL", FieldKind::Url, "logo")
                .placeholder("e.g., https://www.google.com/logo.png"),
        ],
    }
}

fn article() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "article".to_string(),
        label: "Article".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "Article",
            "headline": "Article Title",
            "author": {
                "@type": "Person",
                "name": "Author Name"
            },
            "datePublished": "2023-01-01"
        }),
        fields: vec![
            Field::new("headline", "Headline", FieldKind::Text, "headline")
                .placeholder("e.g., How to Bake Sourdough"),
            Field::new("authorName", "Author Name", FieldKind::Text, "author.name")
                .placeholder("e.g., Jane Doe"),
            Field::new("datePublished", "Date Published", FieldKind::Date, "datePublished"),
        ],
    }
}

fn product() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "product".to_string(),
        label: "Product".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "Product",
            "name": "Product Name",
            "image": "https://example.com/product-image.jpg",
            "description": "Product description",
            "sku": "0446310786",
            "brand": {
                "@type": "Brand",
                "name": "Brand Name"
            }
        }),
        fields: vec![
            Field::new("name", "Product Name", FieldKind::Text, "name")
                .placeholder("e.g., Executive Anvil"),
            Field::new("image", "Image URL", FieldKind::Url, "image")
                .placeholder("e.g., https://example.com/photos/anvil.jpg"),
            Field::new("description", "Description", FieldKind::Textarea, "description")
                .placeholder("e.g., Sleeker than ACME's Classic Anvil"),
            Field::new("sku", "SKU", FieldKind::Text, "sku").placeholder("e.g., 0446310786"),
            Field::new("brandName", "Brand Name", FieldKind::Text, "brand.name")
                .placeholder("e.g., ACME"),
        ],
    }
}

fn event() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "event".to_string(),
        label: "Event".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "Event",
            "name": "Event Name",
            "startDate": "2025-07-21T19:00:00-05:00",
            "endDate": "2025-07-21T23:00:00-05:00",
            "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
            "eventStatus": "https://schema.org/EventScheduled",
            "location": {
                "@type": "Place",
                "name": "Venue Name",
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": "100 West Snickerpark Dr",
                    "addressLocality": "Snickertown",
                    "postalCode": "19019",
                    "addressCountry": "US"
                }
            },
            "description": "Event description"
        }),
        fields: vec![
            Field::new("eventName", "Event Name", FieldKind::Text, "name")
                .placeholder("e.g., The Adventures of Kira and Morrison"),
            Field::new("startDate", "Start", FieldKind::Datetime, "startDate"),
            Field::new("endDate", "End", FieldKind::Datetime, "endDate"),
            Field::new("venueName", "Venue Name", FieldKind::Text, "location.name")
                .placeholder("e.g., Snickerpark Stadium"),
            Field::new(
                "streetAddress",
                "Street Address",
                FieldKind::Text,
                "location.address.streetAddress",
            )
            .placeholder("e.g., 100 West Snickerpark Dr"),
            Field::new("city", "City", FieldKind::Text, "location.address.addressLocality")
                .placeholder("e.g., Snickertown"),
            Field::new("postalCode", "Postal Code", FieldKind::Text, "location.address.postalCode")
                .placeholder("e.g., 19019"),
            Field::new("country", "Country", FieldKind::Text, "location.address.addressCountry")
                .placeholder("e.g., US"),
            Field::new("description", "Description", FieldKind::Textarea, "description"),
        ],
    }
}

fn person() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "person".to_string(),
        label: "Person".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "Person",
            "name": "Person Name",
            "jobTitle": "Job Title",
            "url": "https://example.com",
            "image": "https://example.com/photo.jpg",
            "worksFor": {
                "@type": "Organization",
                "name": "Company Name"
            },
            "sameAs": [
                "https://www.linkedin.com/in/example",
                "https://twitter.com/example"
            ]
        }),
        fields: vec![
            Field::new("personName", "Full Name", FieldKind::Text, "name")
                .placeholder("e.g., Grace Hopper"),
            Field::new("jobTitle", "Job Title", FieldKind::Text, "jobTitle")
                .placeholder("e.g., Rear Admiral"),
            Field::new("url", "Website URL", FieldKind::Url, "url"),
            Field::new("image", "Photo URL", FieldKind::Url, "image"),
            Field::new("employer", "Works For", FieldKind::Text, "worksFor.name")
                .placeholder("e.g., US Navy"),
            Field::new("sameAs", "Profile URLs (one per line)", FieldKind::Textarea, "sameAs")
                .shape(ValueShape::List)
                .placeholder("https://www.linkedin.com/in/..."),
        ],
    }
}

fn webpage() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "webpage".to_string(),
        label: "Web Page".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "WebPage",
            "name": "Page Title",
            "url": "https://example.com/page",
            "description": "Page description",
            "inLanguage": "en"
        }),
        fields: vec![
            Field::new("pageName", "Page Title", FieldKind::Text, "name"),
            Field::new("pageUrl", "Page URL", FieldKind::Url, "url"),
            Field::new("description", "Description", FieldKind::Textarea, "description"),
            Field::new("language", "Language", FieldKind::Text, "inLanguage").placeholder("e.g., en"),
        ],
    }
}

fn local_business() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "localBusiness".to_string(),
        label: "Local Business".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "LocalBusiness",
            "name": "Business Name",
            "image": "https://example.com/storefront.jpg",
            "telephone": "+1-555-555-5555",
            "priceRange": "$$",
            "url": "https://example.com",
            "address": {
                "@type": "PostalAddress",
                "streetAddress": "123 Main St",
                "addressLocality": "Springfield",
                "addressRegion": "IL",
                "postalCode": "62701",
                "addressCountry": "US"
            },
            "openingHours": "Mo-Fr 09:00-17:00"
        }),
        fields: vec![
            Field::new("businessName", "Business Name", FieldKind::Text, "name")
                .placeholder("e.g., Dave's Steak House"),
            Field::new("image", "Image URL", FieldKind::Url, "image"),
            Field::new("telephone", "Telephone", FieldKind::Tel, "telephone")
                .placeholder("e.g., +1-555-555-5555"),
            Field::new("priceRange", "Price Range", FieldKind::Text, "priceRange")
                .placeholder("e.g., $$"),
            Field::new("url", "Website URL", FieldKind::Url, "url"),
            Field::new("streetAddress", "Street Address", FieldKind::Text, "address.streetAddress"),
            Field::new("city", "City", FieldKind::Text, "address.addressLocality"),
            Field::new("region", "State / Region", FieldKind::Text, "address.addressRegion"),
            Field::new("postalCode", "Postal Code", FieldKind::Text, "address.postalCode"),
            Field::new("country", "Country", FieldKind::Text, "address.addressCountry"),
            Field::new("openingHours", "Opening Hours", FieldKind::Text, "openingHours")
                .placeholder("e.g., Mo-Fr 09:00-17:00"),
        ],
    }
}

fn profile_page() -> SchemaTypeConfig {
    let counter = |id: &str, label: &str, path: &str, value: &str| {
        Field::new(id, label, FieldKind::Number, path)
            .placeholder(value)
            .default_value(value)
    };

    SchemaTypeConfig {
        key: "profilePage".to_string(),
        label: "Profile Page".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "ProfilePage",
            "dateCreated": null,
            "dateModified": null,
            "mainEntity": {
                "@type": "Person",
                "name": "Angelo Huff",
                "alternateName": "ahuff23",
                "identifier": "123475623",
                "interactionStatistic": [{
                    "@type": "InteractionCounter",
                    "interactionType": "https://schema.org/FollowAction",
                    "userInteractionCount": 1
                }, {
                    "@type": "InteractionCounter",
                    "interactionType": "https://schema.org/LikeAction",
                    "userInteractionCount": 5
                }],
                "agentInteractionStatistic": {
                    "@type": "InteractionCounter",
                    "interactionType": "https://schema.org/WriteAction",
                    "userInteractionCount": 2346
                },
                "description": "Defender of Truth",
                "image": "https://example.com/avatars/ahuff23.jpg",
                "sameAs": [
                    "https://www.example.com/real-angelo",
                    "https://example.com/profile/therealangelohuff"
                ]
            }
        }),
        fields: vec![
            Field::new("personName", "Person Name", FieldKind::Text, "mainEntity.name")
                .placeholder("e.g., Angelo Huff")
                .default_value("Angelo Huff"),
            Field::new(
                "alternateName",
                "Alternate Name (Username)",
                FieldKind::Text,
                "mainEntity.alternateName",
            )
            .placeholder("e.g., ahuff23")
            .default_value("ahuff23"),
            Field::new("identifier", "User Identifier", FieldKind::Text, "mainEntity.identifier")
                .placeholder("e.g., 123475623")
                .default_value("123475623"),
            Field::new("description", "Description", FieldKind::Text, "mainEntity.description")
                .placeholder("e.g., Defender of Truth")
                .default_value("Defender of Truth"),
            Field::new("imageUrl", "Profile Image URL", FieldKind::Url, "mainEntity.image")
                .placeholder("e.g., https://example.com/avatars/ahuff23.jpg")
                .default_value("https://example.com/avatars/ahuff23.jpg"),
            counter(
                "followCount",
                "Follow Count",
                "mainEntity.interactionStatistic[0].userInteractionCount",
                "1",
            ),
            counter(
                "likeCount",
                "Like Count",
                "mainEntity.interactionStatistic[1].userInteractionCount",
                "5",
            ),
            counter(
                "writeCount",
                "Write Count",
                "mainEntity.agentInteractionStatistic.userInteractionCount",
                "2346",
            ),
            Field::new("sameAs", "Same As URLs (one per line)", FieldKind::Textarea, "mainEntity.sameAs")
                .shape(ValueShape::List)
                .placeholder("e.g., https://www.example.com/real-angelo")
                .default_value(
                    "https://www.example.com/real-angelo\nhttps://example.com/profile/therealangelohuff",
                ),
            Field::new("dateCreated", "Date Created", FieldKind::Datetime, "dateCreated")
                .defaults_to_now(0),
            Field::new("dateModified", "Date Modified", FieldKind::Datetime, "dateModified")
                .defaults_to_now(3),
        ],
    }
}

fn news_article() -> SchemaTypeConfig {
    SchemaTypeConfig {
        key: "newsArticle".to_string(),
        label: "News Article".to_string(),
        template: json!({
            "@context": CONTEXT,
            "@type": "NewsArticle",
            "headline": "Title of a News Article",
            "image": [
                "https://example.com/photos/1x1/photo.jpg",
                "https://example.com/photos/4x3/photo.jpg",
                "https://example.com/photos/16x9/photo.jpg"
            ],
            "datePublished": null,
            "dateModified": null,
            "author": [{
                "@type": "Person",
                "name": "Jane Doe",
                "url": "https://example.com/profile/janedoe123"
            }, {
                "@type": "Person",
                "name": "John Doe",
                "url": "https://example.com/profile/johndoe123"
            }]
        }),
        fields: vec![
            Field::new("headline", "Headline", FieldKind::Text, "headline")
                .placeholder("e.g., Title of a News Article"),
            Field::new("images", "Image URLs (comma or newline separated)", FieldKind::Textarea, "image")
                .shape(ValueShape::List)
                .placeholder("https://example.com/photos/1x1/photo.jpg"),
            Field::new("datePublished", "Date Published", FieldKind::Datetime, "datePublished")
                .defaults_to_now(0),
            Field::new("dateModified", "Date Modified", FieldKind::Datetime, "dateModified")
                .defaults_to_now(0),
            Field::new("authors", "Authors (JSON)", FieldKind::Textarea, "author")
                .shape(ValueShape::Authors)
                .placeholder(r#"[{"name": "Jane Doe", "url": "https://example.com/profile/janedoe123"}]"#),
        ],
    }
}
