table! {
    listings (listing_id) {
        listing_id -> Int8,
        user_id -> Int8,
        title -> Text,
        description -> Text,
        test_link -> Nullable<Text>,
        image_url -> Nullable<Text>,
        location -> Nullable<Text>,
        instructions -> Text,
        limitations -> Text,
        objectives -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    questions (question_id) {
        question_id -> Int8,
        user_id -> Int8,
        question -> Text,
        answer -> Nullable<Text>,
        likes -> Int4,
        created_at -> Timestamptz,
    }
}

table! {
    ratings (rating_id) {
        rating_id -> Int8,
        listing_id -> Int8,
        user_id -> Int8,
        rating -> Int2,
        feedback -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    users (user_id) {
        user_id -> Int8,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        country -> Text,
        user_type -> Text,
        interests -> Array<Text>,
        created_at -> Timestamptz,
    }
}

joinable!(listings -> users (user_id));
joinable!(questions -> users (user_id));
joinable!(ratings -> listings (listing_id));
joinable!(ratings -> users (user_id));

allow_tables_to_appear_in_same_query!(listings, questions, ratings, users,);
