//! Built-in vocabulary offered to the user: eras, cultural looks, filters, imagination options.
use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EraCategory {
    pub name: &'static str,
    pub eras: &'static [&'static str],
}

/// A country and the traditional looks offered for it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CulturalCountry {
    pub name: &'static str,
    pub regions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Filter {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ERA_CATEGORIES: &[EraCategory] = &[
    EraCategory {
        name: "Ancient & Mythological",
        eras: &[
            "Ancient Egyptian Pharaoh", "Roman Gladiator", "Viking Warrior", "Feudal Japan Samurai",
            "Ramayana Era Royalty", "Greek Philosopher", "Aztec Priest", "Medieval Knight",
        ],
    },
    EraCategory {
        name: "Historical & Cultural",
        eras: &[
            "Renaissance Artist", "Elizabethan Noble", "Golden Age Pirate", "French Revolutionist",
            "Victorian Era Explorer", "Roaring Twenties Flapper", "1940s Film Noir Detective",
            "1950s Rock & Roll Star", "1960s Hippie", "1970s Disco Dancer", "1980s Neon Punk",
            "1990s Grunge Musician", "2000s Y2K Pop Icon", "Wild West Outlaw", "1970s Bollywood Star",
            "Indian Maharaja",
        ],
    },
    EraCategory {
        name: "Artistic Styles",
        eras: &[
            "as an Impressionist Painting", "as a Cubist Portrait", "in the Art Deco style",
            "as a Surrealist Dream", "as a Pop Art piece", "as a Baroque Painting",
            "as a Minimalist line drawing",
        ],
    },
    EraCategory {
        name: "Future & Sci-Fi",
        eras: &[
            "Cyberpunk Hacker", "Solarpunk Botanist", "Galactic Space Explorer", "Steampunk Inventor",
            "Post-Apocalyptic Survivor", "Utopian Future Citizen", "Starship Captain",
        ],
    },
    EraCategory {
        name: "Fantasy",
        eras: &["as a High Elf", "as a Dwarven Blacksmith", "as a powerful Sorcerer", "as a Forest Fairy", "as a DnD-style Rogue"],
    },
];

pub const CULTURAL_LOOKS: &[CulturalCountry] = &[
    CulturalCountry { name: "Egypt", regions: &["Galabeya", "Bedouin traditional dress"] },
    CulturalCountry { name: "Ethiopia", regions: &["Habesha Kemis", "Oromo traditional wear"] },
    CulturalCountry { name: "Ghana", regions: &["Kente cloth", "Adinkra cloth smock"] },
    CulturalCountry {
        name: "Kenya",
        regions: &[
            "Maasai Shuka and beadwork",
            "Kikuyu traditional attire",
            "Swahili Kanga",
        ],
    },
    CulturalCountry { name: "Morocco", regions: &["Djellaba", "Kaftan", "Berber traditional dress"] },
    CulturalCountry {
        name: "Nigeria",
        regions: &[
            "Yoruba Aso Oke",
            "Igbo Isiagu",
            "Hausa Babban Riga",
            "Efik traditional attire",
        ],
    },
    CulturalCountry {
        name: "South Africa",
        regions: &[
            "Zulu traditional attire (Umhbaco)",
            "Xhosa beadwork clothing",
            "Ndebele patterned blankets",
        ],
    },
    CulturalCountry { name: "Argentina", regions: &["Gaucho traditional wear", "Tango dress"] },
    CulturalCountry { name: "Bolivia", regions: &["Pollera skirt and Bowler hat", "Aymara traditional dress"] },
    CulturalCountry { name: "Brazil", regions: &["Bahian dress (Baiana)", "Samba costume", "Gaúcho bombachas"] },
    CulturalCountry { name: "Canada", regions: &["First Nations ceremonial regalia", "Métis sash", "Inuit amauti"] },
    CulturalCountry { name: "Chile", regions: &["Huaso and Huasa attire", "Mapuche traditional dress"] },
    CulturalCountry { name: "Colombia", regions: &["Sombrero Vueltiao and white shirt", "Cumbia pollera dress"] },
    CulturalCountry { name: "Guatemala", regions: &["Maya huipil and corte", "Quetzaltenango traje"] },
    CulturalCountry {
        name: "Mexico",
        regions: &[
            "Jalisco Mariachi suit",
            "Veracruz Jarocha dress",
            "Yucatán Huipil",
            "Oaxaca Tehuana dress",
            "Chiapas Parachico costume",
        ],
    },
    CulturalCountry {
        name: "Peru",
        regions: &[
            "Andean Poncho and Chullo",
            "Quechua Lliklla mantle",
            "Shipibo-Conibo geometric patterns",
        ],
    },
    CulturalCountry {
        name: "United States",
        regions: &[
            "Native American powwow regalia",
            "Hawaiian Aloha shirt and muʻumuʻu",
            "Cajun Mardi Gras costume",
        ],
    },
    CulturalCountry { name: "Afghanistan", regions: &["Pashtun Khet partug", "Hazara traditional dress"] },
    CulturalCountry { name: "Bhutan", regions: &["Gho for men", "Kira for women"] },
    CulturalCountry {
        name: "China",
        regions: &[
            "Hanfu",
            "Qipao (Cheongsam)",
            "Tibetan Chuba",
            "Miao ethnic embroidery",
        ],
    },
    CulturalCountry {
        name: "India",
        regions: &[
            "Andhra Pradesh - Langa Voni / Saree",
            "Arunachal Pradesh - Adi traditional attire",
            "Arunachal Pradesh - Apatani traditional attire",
            "Arunachal Pradesh - Nyishi traditional attire",
            "Arunachal Pradesh - Galo traditional attire",
            "Arunachal Pradesh - Monpa traditional attire",
            "Assam - Bodo traditional attire (Dokhona)",
            "Assam - Mishing traditional attire (Ege)",
            "Assam - Karbi traditional attire (Pini-pekok)",
            "Assam - Dimasa traditional attire (Rigu)",
            "Bihar - Saree (Seedha Anchal style)",
            "Chhattisgarh - Lugda Saree / Polkha",
            "Goa - Pano Bhaju / Nav-Vari Saree",
            "Gujarat - Chaniya Choli / Ghagra",
            "Haryana - Ghagra / Odhni",
            "Himachal Pradesh - Pattu / Salwar Kameez",
            "Jharkhand - Saree / Panchi Parhan",
            "Karnataka - Ilkal & Mysore Silk Sarees",
            "Kerala - Mundum Neriyathum / Kasavu Saree",
            "Madhya Pradesh - Chanderi & Maheshwari Sarees",
            "Maharashtra - Nauvari Saree / Paithani Saree",
            "Manipur - Meitei (Phanek, Innaphi)",
            "Manipur - Tangkhul Naga attire",
            "Manipur - Rongmei (Kabui) Naga attire",
            "Manipur - Thadou Kuki attire",
            "Meghalaya - Khasi (Jainsem)",
            "Meghalaya - Garo (Dakmanda)",
            "Meghalaya - Jaintia (Pnar) attire",
            "Mizoram - Puan (Lushai, Hmar, Lai)",
            "Mizoram - Chakma traditional attire",
            "Nagaland - Angami Naga shawls",
            "Nagaland - Ao Naga warrior attire",
            "Nagaland - Konyak Naga traditional dress",
            "Nagaland - Sumi (Sema) Naga attire",
            "Nagaland - Lotha Naga shawls",
            "Odisha - Sambalpuri & Bomkai Sarees",
            "Punjab - Patiala Salwar Kameez",
            "Rajasthan - Ghagra Choli / Rajputi Poshak",
            "Sikkim - Bhutia (Bakhu/Kho)",
            "Sikkim - Lepcha (Dumdyám)",
            "Sikkim - Limbu traditional attire",
            "Tamil Nadu - Kanjeevaram Saree / Pavadai Dhavani",
            "Telangana - Pochampally & Gadwal Sarees",
            "Tripura - Tripuri (Rignai, Risa)",
            "Tripura - Reang (Bru) traditional attire",
            "Tripura - Chakma traditional attire",
            "Uttar Pradesh - Chikankari Saree / Salwar Kameez",
            "Uttarakhand - Ghagri / Pichora",
            "West Bengal - Tant & Baluchari Sarees",
        ],
    },
    CulturalCountry { name: "Indonesia", regions: &["Batik shirt", "Kebaya", "Balinese temple dress"] },
    CulturalCountry { name: "Iran", regions: &["Persian traditional clothing", "Kurdish traditional dress"] },
    CulturalCountry {
        name: "Japan",
        regions: &[
            "Kimono formal wear",
            "Yukata summer wear",
            "Ainu traditional dress",
            "Ryukyuan from Okinawa",
        ],
    },
    CulturalCountry { name: "Kazakhstan", regions: &["Shapan (caftan)", "Saukele headdress"] },
    CulturalCountry { name: "Korea", regions: &["Hanbok formal wear", "Jeogori and Chima"] },
    CulturalCountry { name: "Malaysia", regions: &["Baju Melayu for men", "Baju Kurung for women"] },
    CulturalCountry { name: "Mongolia", regions: &["Deel", "Gutal boots"] },
    CulturalCountry { name: "Nepal", regions: &["Daura-Suruwal and Gunyu-Cholo", "Newari traditional wear"] },
    CulturalCountry { name: "Pakistan", regions: &["Shalwar Kameez", "Sindhi Ajrak"] },
    CulturalCountry {
        name: "Philippines",
        regions: &[
            "Barong Tagalog for men",
            "Maria Clara Gown for women",
            "Igorot traditional wear",
        ],
    },
    CulturalCountry { name: "Saudi Arabia", regions: &["Thobe and Ghutra for men", "Abaya and Niqab for women"] },
    CulturalCountry {
        name: "Thailand",
        regions: &[
            "Chut Thai (Thai formal dress)",
            "Hill tribe traditional clothing",
        ],
    },
    CulturalCountry { name: "Turkey", regions: &["Ottoman-style Kaftan", "Anatolian folk dress"] },
    CulturalCountry { name: "Vietnam", regions: &["Áo Dài", "Áo Tứ Thân (four-part dress)"] },
    CulturalCountry { name: "Austria", regions: &["Lederhosen", "Dirndl"] },
    CulturalCountry { name: "England", regions: &["Morris dancing costume", "Beefeater uniform"] },
    CulturalCountry { name: "Finland", regions: &["Kansallispuku (national costume)"] },
    CulturalCountry { name: "France", regions: &["Breton traditional dress", "Alsatian costume"] },
    CulturalCountry { name: "Germany", regions: &["Bavarian Lederhosen and Dirndl", "Black Forest Tracht"] },
    CulturalCountry { name: "Greece", regions: &["Foustanella", "Amalia costume"] },
    CulturalCountry { name: "Hungary", regions: &["Matyó embroidery", "Kalocsai folk dress"] },
    CulturalCountry { name: "Iceland", regions: &["Þjóðbúningurinn (national costume)"] },
    CulturalCountry { name: "Ireland", regions: &["Aran sweater", "Irish dancing dress"] },
    CulturalCountry { name: "Italy", regions: &["Sardinian traditional dress", "Sicilian folk costume"] },
    CulturalCountry { name: "Netherlands", regions: &["Volendam traditional costume", "Zeeland regional dress"] },
    CulturalCountry { name: "Norway", regions: &["Bunad (national costume)"] },
    CulturalCountry { name: "Poland", regions: &["Kraków folk costume", "Goral (highlander) outfit"] },
    CulturalCountry { name: "Portugal", regions: &["Minho region Traje de Viana", "Nazaré fishermen clothing"] },
    CulturalCountry { name: "Romania", regions: &["Ie (traditional blouse)", "Carpathian folk costume"] },
    CulturalCountry { name: "Russia", regions: &["Sarafan", "Kosovorotka shirt", "Ushanka hat"] },
    CulturalCountry { name: "Scotland", regions: &["Highland kilt and tartan", "Shetland Fair Isle knitwear"] },
    CulturalCountry {
        name: "Spain",
        regions: &[
            "Andalusian Flamenco dress",
            "Traje de Fallera (Valencia)",
            "Basque traditional clothing",
        ],
    },
    CulturalCountry { name: "Sweden", regions: &["Sverigedräkten (national costume)", "Sami Gákti"] },
    CulturalCountry { name: "Switzerland", regions: &["Appenzeller Tracht", "Berner Tracht"] },
    CulturalCountry { name: "Ukraine", regions: &["Vyshyvanka (embroidered shirt)", "Sharovary trousers"] },
    CulturalCountry { name: "Australia", regions: &["Aboriginal ceremonial dress", "Akubra hat and Driza-Bone coat"] },
    CulturalCountry { name: "Fiji", regions: &["Sulu (sarong)", "Tapa cloth"] },
    CulturalCountry { name: "New Zealand", regions: &["Māori Kākahu (cloak)", "Piupiu skirt"] },
    CulturalCountry {
        name: "Papua New Guinea",
        regions: &[
            "Highlands ceremonial dress",
            "Trobriand Islands grass skirts",
        ],
    },
    CulturalCountry { name: "Samoa", regions: &["Lavalava", "Puletasi"] },
];

pub const FILTERS: &[Filter] = &[
    Filter { name: "Vintage Film", description: "Classic, grainy look with faded colors, reminiscent of old film stock." },
    Filter { name: "Noir B&W", description: "High-contrast black and white with deep shadows and dramatic lighting." },
    Filter { name: "Sepia Tone", description: "Warm, brownish monochrome for an antique, historical photograph feel." },
    Filter { name: "Golden Hour", description: "Soft, warm, and diffused lighting as if shot during sunrise or sunset." },
    Filter { name: "Sun Flare", description: "Adds a bright, artistic lens flare effect, suggesting strong sunlight." },
    Filter { name: "Light Leaks", description: "Simulates streaks of colored light caused by an old camera's light leak." },
    Filter { name: "Lomography", description: "Vibrant, saturated colors, high contrast, and vignetting for a quirky look." },
    Filter { name: "Cyanotype", description: "A striking cyan-blue monochrome print, like an old architectural blueprint." },
    Filter {
        name: "Ghibli Art",
        description: "Transforms the photo into the beautiful, hand-drawn animation style of Studio Ghibli films, with lush backgrounds and soft characters.",
    },
    Filter { name: "Glitch Art", description: "Digital distortion, pixelation, and color shifts for a modern, techy feel." },
    Filter {
        name: "Double Exposure",
        description: "Blends the original photo with a second, often thematic, image like a forest or cityscape.",
    },
    Filter { name: "Infrared Photo", description: "Surreal look where foliage turns white and skies darken dramatically." },
    Filter { name: "Anamorphic Lens Flare", description: "Adds cinematic, horizontal blueish lens flares across the image." },
];

pub const STYLES: &[&str] = &[
    "Photorealistic", "Cinematic", "Oil Painting", "Watercolor", "Pencil Sketch", "Anime / Manga",
    "Concept Art", "Pixel Art", "Cyberpunk", "Steampunk", "Vintage Photo", "Minimalist",
];

/// First entry is the form default.
pub const FIGURE_SIZES: &[&str] = &["Unspecified", "Slim", "Athletic", "Average", "Curvy", "Muscular", "Broad-shouldered", "Petite"];
pub const ASPECT_RATIOS: &[&str] = &["Portrait (3:4)", "Landscape (4:3)", "Widescreen (16:9)", "Square (1:1)"];
pub const IMAGE_FRAMINGS: &[&str] = &[
    "Full Body Shot", "Medium Shot (Waist Up)", "Cowboy Shot (Mid-thigh Up)", "Close-up Portrait", "Extreme Close-up",
];

pub fn all_eras() -> Vec<&'static str> {
    ERA_CATEGORIES.iter().flat_map(|c| c.eras.iter().copied()).collect()
}

pub fn random_eras(count: usize) -> Vec<String> {
    let eras = all_eras();
    eras.choose_multiple(&mut rand::thread_rng(), count)
        .map(|e| e.to_string())
        .collect()
}

pub fn cultural_regions(country: &str) -> Option<&'static [&'static str]> {
    CULTURAL_LOOKS.iter().find(|c| c.name == country).map(|c| c.regions)
}

pub fn is_cultural_look(country: &str, region: &str) -> bool {
    cultural_regions(country).map_or(false, |regions| regions.contains(&region))
}

pub fn find_filter(name: &str) -> Option<&'static Filter> {
    FILTERS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}
