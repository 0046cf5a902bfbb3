/// Built-in poster prompt used until an edited template is saved.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"Create a vertical 9:16 cinematic travel poster titled "{{title}}" with the English subtitle "{{englishTitle}}".

The poster tells the story of a journey from {{dateRange}} across three stops, in this order:
1. {{loc1_name}} ({{loc1_date}})
2. {{loc2_name}} ({{loc2_date}})
3. {{loc3_name}} ({{loc3_date}})

Composition:
- The traveler from the reference photo stands in the foreground, facing the horizon. Keep their face, hairstyle and clothing faithful to the photo.
- Blend recognizable landscapes of all three stops into one continuous scene, flowing from {{loc1_name}} through {{loc2_name}} to {{loc3_name}}.
- Overlay a subtle satellite-map route line connecting the three stops, each marked with a small pin and its date.

Typography:
- Place "{{title}}" large at the top in an elegant serif face, with "{{englishTitle}}" in spaced capitals beneath it.
- Print "{{dateRange}}" in small caps near the bottom edge like a film release date.

Style: anamorphic lens, golden-hour light, soft film grain, teal and amber grading, movie-poster layout, high detail, no watermark."#;
