//! `/api/users` - account listing and management, plus per-user listings.

use super::RouteDescriptor;

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::get("", "/users")
        .query(&["status", "next_page_token"])
        .failure("Error fetching users"),
    RouteDescriptor::post("/add", "/users").failure("Error creating user"),
    RouteDescriptor::get("/:userId", "/users/{userId}")
        .fixed_query(&[("status", "active")])
        .failure("Error fetching user: {userId}"),
    RouteDescriptor::patch("/:userId", "/users/{userId}").failure("Error updating user: {userId}"),
    RouteDescriptor::delete("/:userId", "/users/{userId}")
        .query(&["action"])
        .failure("Error deleting user: {userId}"),
    RouteDescriptor::get("/:userId/meetings", "/users/{userId}/meetings")
        .query(&["next_page_token"])
        .failure("Error fetching meetings for user: {userId}"),
    RouteDescriptor::get("/:userId/webinars", "/users/{userId}/webinars")
        .query(&["next_page_token"])
        .failure("Error fetching webinars for user: {userId}"),
    RouteDescriptor::get("/:userId/recordings", "/users/{userId}/recordings")
        .query(&["from", "to", "next_page_token"])
        .failure("Error fetching recordings for user: {userId}"),
    RouteDescriptor::get("/:userId/meetings/report", "/report/users/{userId}/meetings")
        .query(&["from", "to", "next_page_token"])
        .failure("Error fetching meeting report for user: {userId}"),
    RouteDescriptor::get("/:userId/settings", "/users/{userId}/settings")
        .failure("Error fetching settings for user: {userId}"),
    RouteDescriptor::patch("/:userId/settings", "/users/{userId}/settings")
        .failure("Error updating settings for user: {userId}"),
];
