use std::{collections::BTreeMap, sync::LazyLock};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    Cardio,
}

/// Informal exercise phrase mapped to its canonical display name.
///
/// Keys are lowercase; multiple keys may map to the same canonical name.
#[derive(Clone, Copy)]
pub struct Alias {
    pub name: &'static str,
    pub canonical: &'static str,
    pub category: Category,
}

pub(crate) static ALIASES: LazyLock<BTreeMap<&'static str, Alias>> =
    LazyLock::new(|| ALIAS_ENTRIES.into_iter().map(|a| (a.name, a)).collect());

#[must_use]
pub fn aliases() -> &'static BTreeMap<&'static str, Alias> {
    &ALIASES
}

const ALIAS_ENTRIES: [Alias; 110] = [
    Alias {
        name: "addominali",
        canonical: "Crunch",
        category: Category::Core,
    },
    Alias {
        name: "affondi",
        canonical: "Affondi",
        category: Category::Legs,
    },
    Alias {
        name: "alzate frontali",
        canonical: "Alzate frontali",
        category: Category::Shoulders,
    },
    Alias {
        name: "alzate laterali",
        canonical: "Alzate laterali",
        category: Category::Shoulders,
    },
    Alias {
        name: "arnold press",
        canonical: "Arnold press",
        category: Category::Shoulders,
    },
    Alias {
        name: "back squat",
        canonical: "Squat",
        category: Category::Legs,
    },
    Alias {
        name: "barbell curl",
        canonical: "Curl con bilanciere",
        category: Category::Biceps,
    },
    Alias {
        name: "bench",
        canonical: "Panca piana",
        category: Category::Chest,
    },
    Alias {
        name: "bench press",
        canonical: "Panca piana",
        category: Category::Chest,
    },
    Alias {
        name: "bicipiti",
        canonical: "Curl con bilanciere",
        category: Category::Biceps,
    },
    Alias {
        name: "bulgarian split squat",
        canonical: "Squat bulgaro",
        category: Category::Legs,
    },
    Alias {
        name: "burpee",
        canonical: "Burpees",
        category: Category::Cardio,
    },
    Alias {
        name: "burpees",
        canonical: "Burpees",
        category: Category::Cardio,
    },
    Alias {
        name: "calf",
        canonical: "Calf raise",
        category: Category::Legs,
    },
    Alias {
        name: "calf raise",
        canonical: "Calf raise",
        category: Category::Legs,
    },
    Alias {
        name: "camminata",
        canonical: "Camminata veloce",
        category: Category::Cardio,
    },
    Alias {
        name: "chest press",
        canonical: "Chest press",
        category: Category::Chest,
    },
    Alias {
        name: "chin up",
        canonical: "Trazioni presa inversa",
        category: Category::Back,
    },
    Alias {
        name: "close grip bench",
        canonical: "Panca presa stretta",
        category: Category::Triceps,
    },
    Alias {
        name: "corda",
        canonical: "Salto della corda",
        category: Category::Cardio,
    },
    Alias {
        name: "croci",
        canonical: "Croci con manubri",
        category: Category::Chest,
    },
    Alias {
        name: "croci ai cavi",
        canonical: "Croci ai cavi",
        category: Category::Chest,
    },
    Alias {
        name: "croci manubri",
        canonical: "Croci con manubri",
        category: Category::Chest,
    },
    Alias {
        name: "crunch",
        canonical: "Crunch",
        category: Category::Core,
    },
    Alias {
        name: "curl",
        canonical: "Curl con bilanciere",
        category: Category::Biceps,
    },
    Alias {
        name: "curl a martello",
        canonical: "Curl a martello",
        category: Category::Biceps,
    },
    Alias {
        name: "curl bilanciere",
        canonical: "Curl con bilanciere",
        category: Category::Biceps,
    },
    Alias {
        name: "curl manubri",
        canonical: "Curl manubri",
        category: Category::Biceps,
    },
    Alias {
        name: "curl martello",
        canonical: "Curl a martello",
        category: Category::Biceps,
    },
    Alias {
        name: "cyclette",
        canonical: "Cyclette",
        category: Category::Cardio,
    },
    Alias {
        name: "deadlift",
        canonical: "Stacco da terra",
        category: Category::Back,
    },
    Alias {
        name: "dip",
        canonical: "Dip alle parallele",
        category: Category::Chest,
    },
    Alias {
        name: "distensioni manubri",
        canonical: "Distensioni con manubri",
        category: Category::Chest,
    },
    Alias {
        name: "dumbbell curl",
        canonical: "Curl manubri",
        category: Category::Biceps,
    },
    Alias {
        name: "ellittica",
        canonical: "Ellittica",
        category: Category::Cardio,
    },
    Alias {
        name: "face pull",
        canonical: "Face pull",
        category: Category::Shoulders,
    },
    Alias {
        name: "flessioni",
        canonical: "Piegamenti sulle braccia",
        category: Category::Chest,
    },
    Alias {
        name: "french press",
        canonical: "French press",
        category: Category::Triceps,
    },
    Alias {
        name: "front squat",
        canonical: "Front squat",
        category: Category::Legs,
    },
    Alias {
        name: "goblet squat",
        canonical: "Goblet squat",
        category: Category::Legs,
    },
    Alias {
        name: "hammer curl",
        canonical: "Curl a martello",
        category: Category::Biceps,
    },
    Alias {
        name: "hip thrust",
        canonical: "Hip thrust",
        category: Category::Legs,
    },
    Alias {
        name: "hyperextension",
        canonical: "Iperestensioni",
        category: Category::Back,
    },
    Alias {
        name: "iperestensioni",
        canonical: "Iperestensioni",
        category: Category::Back,
    },
    Alias {
        name: "jump rope",
        canonical: "Salto della corda",
        category: Category::Cardio,
    },
    Alias {
        name: "kickback",
        canonical: "Kickback con manubrio",
        category: Category::Triceps,
    },
    Alias {
        name: "lat",
        canonical: "Lat machine",
        category: Category::Back,
    },
    Alias {
        name: "lat machine",
        canonical: "Lat machine",
        category: Category::Back,
    },
    Alias {
        name: "laterali",
        canonical: "Alzate laterali",
        category: Category::Shoulders,
    },
    Alias {
        name: "leg curl",
        canonical: "Leg curl",
        category: Category::Legs,
    },
    Alias {
        name: "leg extension",
        canonical: "Leg extension",
        category: Category::Legs,
    },
    Alias {
        name: "leg press",
        canonical: "Leg press",
        category: Category::Legs,
    },
    Alias {
        name: "leg raise",
        canonical: "Sollevamento gambe",
        category: Category::Core,
    },
    Alias {
        name: "lento avanti",
        canonical: "Military press",
        category: Category::Shoulders,
    },
    Alias {
        name: "lunge",
        canonical: "Affondi",
        category: Category::Legs,
    },
    Alias {
        name: "military",
        canonical: "Military press",
        category: Category::Shoulders,
    },
    Alias {
        name: "military press",
        canonical: "Military press",
        category: Category::Shoulders,
    },
    Alias {
        name: "mountain climber",
        canonical: "Mountain climber",
        category: Category::Core,
    },
    Alias {
        name: "ohp",
        canonical: "Military press",
        category: Category::Shoulders,
    },
    Alias {
        name: "overhead press",
        canonical: "Military press",
        category: Category::Shoulders,
    },
    Alias {
        name: "panca",
        canonical: "Panca piana",
        category: Category::Chest,
    },
    Alias {
        name: "panca declinata",
        canonical: "Panca declinata",
        category: Category::Chest,
    },
    Alias {
        name: "panca inclinata",
        canonical: "Panca inclinata",
        category: Category::Chest,
    },
    Alias {
        name: "panca piana",
        canonical: "Panca piana",
        category: Category::Chest,
    },
    Alias {
        name: "panca scott",
        canonical: "Curl alla panca Scott",
        category: Category::Biceps,
    },
    Alias {
        name: "panca stretta",
        canonical: "Panca presa stretta",
        category: Category::Triceps,
    },
    Alias {
        name: "parallele",
        canonical: "Dip alle parallele",
        category: Category::Chest,
    },
    Alias {
        name: "pectoral machine",
        canonical: "Pectoral machine",
        category: Category::Chest,
    },
    Alias {
        name: "piegamenti",
        canonical: "Piegamenti sulle braccia",
        category: Category::Chest,
    },
    Alias {
        name: "plank",
        canonical: "Plank",
        category: Category::Core,
    },
    Alias {
        name: "plank laterale",
        canonical: "Plank laterale",
        category: Category::Core,
    },
    Alias {
        name: "polpacci",
        canonical: "Calf raise",
        category: Category::Legs,
    },
    Alias {
        name: "preacher curl",
        canonical: "Curl alla panca Scott",
        category: Category::Biceps,
    },
    Alias {
        name: "pressa",
        canonical: "Leg press",
        category: Category::Legs,
    },
    Alias {
        name: "pull up",
        canonical: "Trazioni alla sbarra",
        category: Category::Back,
    },
    Alias {
        name: "pull-up",
        canonical: "Trazioni alla sbarra",
        category: Category::Back,
    },
    Alias {
        name: "pulldown",
        canonical: "Lat machine",
        category: Category::Back,
    },
    Alias {
        name: "pulley",
        canonical: "Pulley basso",
        category: Category::Back,
    },
    Alias {
        name: "push down",
        canonical: "Pushdown ai cavi",
        category: Category::Triceps,
    },
    Alias {
        name: "push up",
        canonical: "Piegamenti sulle braccia",
        category: Category::Chest,
    },
    Alias {
        name: "push-up",
        canonical: "Piegamenti sulle braccia",
        category: Category::Chest,
    },
    Alias {
        name: "pushdown",
        canonical: "Pushdown ai cavi",
        category: Category::Triceps,
    },
    Alias {
        name: "pushup",
        canonical: "Piegamenti sulle braccia",
        category: Category::Chest,
    },
    Alias {
        name: "rdl",
        canonical: "Stacco rumeno",
        category: Category::Back,
    },
    Alias {
        name: "rematore",
        canonical: "Rematore con bilanciere",
        category: Category::Back,
    },
    Alias {
        name: "rematore manubrio",
        canonical: "Rematore con manubrio",
        category: Category::Back,
    },
    Alias {
        name: "romanian deadlift",
        canonical: "Stacco rumeno",
        category: Category::Back,
    },
    Alias {
        name: "row",
        canonical: "Rematore con bilanciere",
        category: Category::Back,
    },
    Alias {
        name: "rowing machine",
        canonical: "Vogatore",
        category: Category::Cardio,
    },
    Alias {
        name: "russian twist",
        canonical: "Russian twist",
        category: Category::Core,
    },
    Alias {
        name: "salto della corda",
        canonical: "Salto della corda",
        category: Category::Cardio,
    },
    Alias {
        name: "scrollate",
        canonical: "Scrollate con manubri",
        category: Category::Shoulders,
    },
    Alias {
        name: "shoulder press",
        canonical: "Shoulder press",
        category: Category::Shoulders,
    },
    Alias {
        name: "shrug",
        canonical: "Scrollate con manubri",
        category: Category::Shoulders,
    },
    Alias {
        name: "side plank",
        canonical: "Plank laterale",
        category: Category::Core,
    },
    Alias {
        name: "sollevamento gambe",
        canonical: "Sollevamento gambe",
        category: Category::Core,
    },
    Alias {
        name: "spider curl",
        canonical: "Spider curl",
        category: Category::Biceps,
    },
    Alias {
        name: "spin bike",
        canonical: "Cyclette",
        category: Category::Cardio,
    },
    Alias {
        name: "squat",
        canonical: "Squat",
        category: Category::Legs,
    },
    Alias {
        name: "squat bulgaro",
        canonical: "Squat bulgaro",
        category: Category::Legs,
    },
    Alias {
        name: "stacchi",
        canonical: "Stacco da terra",
        category: Category::Back,
    },
    Alias {
        name: "stacco",
        canonical: "Stacco da terra",
        category: Category::Back,
    },
    Alias {
        name: "stacco gambe tese",
        canonical: "Stacco a gambe tese",
        category: Category::Legs,
    },
    Alias {
        name: "stacco rumeno",
        canonical: "Stacco rumeno",
        category: Category::Back,
    },
    Alias {
        name: "tapis",
        canonical: "Tapis roulant",
        category: Category::Cardio,
    },
    Alias {
        name: "tapis roulant",
        canonical: "Tapis roulant",
        category: Category::Cardio,
    },
    Alias {
        name: "trazioni",
        canonical: "Trazioni alla sbarra",
        category: Category::Back,
    },
    Alias {
        name: "treadmill",
        canonical: "Tapis roulant",
        category: Category::Cardio,
    },
    Alias {
        name: "tricipiti ai cavi",
        canonical: "Pushdown ai cavi",
        category: Category::Triceps,
    },
    Alias {
        name: "vogatore",
        canonical: "Vogatore",
        category: Category::Cardio,
    },
];
