//! Prompt construction for itinerary generation.
//!
//! Prompts are deterministic: the same [`TripRequest`] always produces the
//! same strings, so a given submission can be replayed or tested against a
//! stubbed completion client.

use crate::models::TripRequest;

/// Fixed user turn sent alongside the system prompt
pub const USER_PROMPT: &str = "Create an itinerary for my trip.";

/// Build the system prompt embedding destination, day count, and interests.
#[must_use]
pub fn system_prompt(request: &TripRequest) -> String {
    let destination = &request.destination;
    let days = request.days;
    let interests = request.interests_label();

    format!(
        "You are a helpful travel assistant. Create a detailed {days}-day trip itinerary \
for {destination} based on the user's interests: {interests}.

Please structure your response in the following format:

# {days}-Day Trip Itinerary for {destination}

## Day 1
### Morning
- [Time] Activity 1
- [Time] Activity 2

### Afternoon
- [Time] Activity 3
- [Time] Activity 4

### Evening
- [Time] Activity 5
- [Time] Activity 6

### Food & Dining
- [Time] Restaurant/Cafe recommendation
- [Time] Restaurant/Cafe recommendation

[Repeat the above structure for each day]

## Additional Tips
- Tip 1
- Tip 2

Make sure to:
1. Include specific locations, addresses, and estimated times for each activity
2. Consider travel time between locations
3. Group activities by area to minimize travel
4. Include a mix of popular attractions and local experiences
5. Consider opening hours and best times to visit each location
6. Include a variety of dining options that match the user's interests
7. Add practical tips for getting around the city

For multi-day trips, ensure activities are logically grouped and consider:
- Starting with major attractions on the first day
- Grouping activities by neighborhood/area
- Including some flexibility in the schedule
- Suggesting evening activities for each day
- Including a mix of indoor and outdoor activities
- Considering weather-appropriate activities"
    )
}
