//! Static NCERT curriculum tables and the chapter resolver.
//!
//! The tables are curated outlines per class/subject (classes 1-12). For the
//! science stream in classes 11-12 a secondary stream-keyed table applies.
//! The resolver is a pure lookup with a placeholder fallback and always
//! returns a non-empty list.

use crate::domain::Stream;

/// Minimum number of chapters the resolver guarantees.
pub const MIN_CHAPTERS: usize = 12;

// Some language rows in the source syllabus only exist as numbered lessons.
const URDU_LESSONS: [&str; 12] = [
  "سبق 1", "سبق 2", "سبق 3", "سبق 4", "سبق 5", "سبق 6",
  "سبق 7", "سبق 8", "سبق 9", "سبق 10", "سبق 11", "سبق 12",
];
const HINDI_LESSONS: [&str; 12] = [
  "अध्याय 1", "अध्याय 2", "अध्याय 3", "अध्याय 4", "अध्याय 5", "अध्याय 6",
  "अध्याय 7", "अध्याय 8", "अध्याय 9", "अध्याय 10", "अध्याय 11", "अध्याय 12",
];
const SANSKRIT_LESSONS: [&str; 12] = [
  "अध्यायः 1", "अध्यायः 2", "अध्यायः 3", "अध्यायः 4", "अध्यायः 5", "अध्यायः 6",
  "अध्यायः 7", "अध्यायः 8", "अध्यायः 9", "अध्यायः 10", "अध्यायः 11", "अध्यायः 12",
];

/// Resolve the chapter list for a class/subject pair.
///
/// Order of precedence:
/// 1. stream-keyed table (subject "Science", class >= 11, stream given)
/// 2. curated class/subject table
/// 3. synthesized placeholders "{subject} Chapter N" for N = 1..12
pub fn chapters_for(class_number: u8, subject: &str, stream: Option<Stream>) -> Vec<String> {
  if subject == "Science" && class_number >= 11 {
    if let Some(st) = stream {
      if let Some(list) = stream_chapters(class_number, st) {
        return list.iter().map(|s| s.to_string()).collect();
      }
    }
  }

  if let Some(list) = curated(class_number, subject) {
    return list.iter().map(|s| s.to_string()).collect();
  }

  (1..=MIN_CHAPTERS)
    .map(|n| format!("{} Chapter {}", subject, n))
    .collect()
}

fn stream_chapters(class_number: u8, stream: Stream) -> Option<&'static [&'static str]> {
  Some(match (class_number, stream) {
    (11, Stream::Pcb) => &[
      "The Living World", "Biological Classification", "Plant Kingdom", "Animal Kingdom",
      "Morphology of Flowering Plants", "Anatomy of Flowering Plants", "Structural Organisation in Animals",
      "Cell: The Unit of Life", "Biomolecules", "Cell Cycle and Cell Division", "Transport in Plants",
      "Mineral Nutrition", "Photosynthesis in Higher Plants", "Respiration in Plants", "Plant Growth and Development",
      "Digestion and Absorption", "Breathing and Exchange of Gases", "Body Fluids and Circulation",
      "Excretory Products and their Elimination", "Locomotion and Movement", "Neural Control and Coordination",
      "Chemical Coordination and Integration",
    ],
    (11, Stream::Pcm) => &[
      "Physical World", "Units and Measurements", "Motion in a Straight Line", "Motion in a Plane",
      "Laws of Motion", "Work, Energy and Power", "System of Particles and Rigid Body", "Gravitation",
      "Mechanical Properties of Solids", "Mechanical Properties of Fluids", "Thermal Properties of Matter",
      "Thermodynamics", "Kinetic Theory", "Oscillations", "Waves",
      "Some Basic Concepts of Chemistry", "Structure of Atom", "Classification of Elements and Periodicity",
      "Chemical Bonding and Molecular Structure", "States of Matter", "Thermodynamics", "Equilibrium",
      "Redox Reactions", "Hydrogen", "s-Block Elements", "p-Block Elements",
      "Sets", "Relations and Functions", "Trigonometric Functions", "Principle of Mathematical Induction",
      "Complex Numbers and Quadratic Equations", "Linear Inequalities", "Permutations and Combinations",
      "Binomial Theorem", "Sequences and Series", "Straight Lines", "Conic Sections",
    ],
    (12, Stream::Pcb) => &[
      "Reproduction in Organisms", "Sexual Reproduction in Flowering Plants", "Human Reproduction",
      "Reproductive Health", "Principles of Inheritance and Variation", "Molecular Basis of Inheritance",
      "Evolution", "Human Health and Disease", "Strategies for Enhancement in Food Production",
      "Microbes in Human Welfare", "Biotechnology: Principles and Processes", "Biotechnology and its Applications",
      "Organisms and Populations", "Ecosystem", "Biodiversity and Conservation", "Environmental Issues",
    ],
    (12, Stream::Pcm) => &[
      "Electric Charges and Fields", "Electrostatic Potential and Capacitance", "Current Electricity",
      "Moving Charges and Magnetism", "Magnetism and Matter", "Electromagnetic Induction",
      "Alternating Current", "Electromagnetic Waves", "Ray Optics and Optical Instruments",
      "Wave Optics", "Dual Nature of Radiation and Matter", "Atoms", "Nuclei", "Semiconductor Electronics",
      "Solutions", "Electrochemistry", "Chemical Kinetics", "Surface Chemistry", "General Principles and Processes",
      "The p-Block Elements", "The d and f Block Elements", "Coordination Compounds", "Haloalkanes and Haloarenes",
      "Alcohols, Phenols and Ethers", "Aldehydes, Ketones and Carboxylic Acids", "Amines", "Biomolecules",
      "Relations and Functions", "Inverse Trigonometric Functions", "Matrices", "Determinants",
      "Continuity and Differentiability", "Applications of Derivatives", "Integrals", "Applications of Integrals",
      "Differential Equations", "Vector Algebra", "Three Dimensional Geometry", "Linear Programming", "Probability",
    ],
    _ => return None,
  })
}

fn curated(class_number: u8, subject: &str) -> Option<&'static [&'static str]> {
  Some(match (class_number, subject) {
    (1, "English") => &[
      "Alphabet and Words", "My Family", "Colors Around", "Animals and Birds", "Numbers in Words",
      "Good Habits", "At School", "At the Park", "Seasons", "Food We Eat", "Our Body", "Festival Fun",
    ],
    (1, "Hindi") => &[
      "अक्षर ज्ञान", "मेरा परिवार", "रंग-बिरंगी दुनिया", "जानवर दोस्त", "संख्या और शब्द", "अच्छी आदतें",
      "हमारा विद्यालय", "खेल-कूद", "ऋतु", "खान-पान", "हमारा शरीर", "त्योहार",
    ],
    (1, "Sanskrit") => &[
      "वर्णमाला", "मम कुलम्", "वर्णाः", "पश्य प्राणी", "संख्याः", "सत्क्रियाः",
      "विद्यालयः", "उद्याने", "ऋतवः", "आहारः", "शरीरम्", "उत्सवाः",
    ],
    (1, "Urdu") => &[
      "حروفِ تہجی", "میرا خاندان", "رنگ", "جانور", "اعداد", "اچھی عادتیں",
      "ہمارا اسکول", "پارک", "موسم", "کھانے", "ہمارا جسم", "تہوار",
    ],
    (1, "Science") => &[
      "Living and Non-Living", "Plants Around Us", "Animals Around Us", "Our Food", "Water", "Air",
      "Weather", "Our Body", "Safety Rules", "Good Habits", "Our Home", "Our Earth",
    ],
    (1, "Social Studies (SST)") => &[
      "Me and My Family", "My School", "My Neighborhood", "People Who Help Us", "Transport",
      "Communication", "Our Festivals", "Our Earth", "Weather and Seasons", "India My Country",
      "Our National Symbols", "Good Manners",
    ],
    (1, "Mathematics") => &[
      "Shapes and Space", "Numbers from One to Nine", "Addition", "Subtraction",
      "Numbers from Ten to Twenty", "Time", "Measurement", "Numbers from Twenty-one to Fifty",
      "Data Handling", "Patterns", "Numbers", "Money", "How Many",
    ],

    (2, "English") => &[
      "Fun with Words", "People at Work", "Our Pets", "On the Road", "Weather", "At the Market",
      "In the Garden", "At the Beach", "Time", "Healthy Habits", "Safety First", "Celebrations",
    ],
    (2, "Hindi") => &[
      "शब्दों से खेल", "काम करने वाले लोग", "हमारे पालतू", "सड़क पर", "मौसम", "बाजार",
      "बगीचे में", "समुद्र तट", "समय", "स्वच्छता", "सुरक्षा", "उत्सव",
    ],
    (2, "Sanskrit") => &[
      "शब्दक्रीडा", "सेवकाः", "पालितपशवः", "मार्गे", "वातावरणम्", "हाटः",
      "उद्यानम्", "सागरतीरम्", "समयः", "स्वास्थ्यं", "सुरक्षा", "उत्सवाः",
    ],
    (2, "Urdu") => &[
      "الفاظ کا کھیل", "کام کرنے والے", "پالتو جانور", "سڑک پر", "موسم", "بازار",
      "باغ", "ساحل", "وقت", "صحت مند عادات", "حفاظت", "تقریبات",
    ],
    (2, "Science") => &[
      "Plants and Their Uses", "Animals and Their Homes", "Food and Health", "Houses We Live In",
      "Clothes We Wear", "Air and Water", "Weather and Seasons", "Transport", "Communication",
      "Safety and First Aid", "Our Universe", "The Earth",
    ],
    (2, "Social Studies (SST)") => &[
      "Family Types", "Good Habits", "People Around Us", "Neighborhood Services", "Travel and Transport",
      "Means of Communication", "Our Festivals", "Our Country India", "Directions and Maps",
      "Early Humans", "Work We Do", "Saving Resources",
    ],
    (2, "Mathematics") => &[
      "What is Long, What is Round?", "Counting in Groups", "How Much Can You Carry?", "Counting in Tens",
      "Patterns", "Footprints", "Jugs and Mugs", "Tens and Ones", "My Funday", "Add Our Points",
      "Lines and Lines", "Give and Take", "The Longest Step", "Birds Come, Birds Go", "How Many Ponytails?",
    ],

    (3, "English") => &[
      "Good Morning", "The Magic Garden", "Bird Talk", "Nina and the Baby Sparrows", "Little by Little",
      "Sea Song", "The Balloon Man", "Trains", "Puppy and I", "The Ship of the Desert", "India",
      "Games We Play",
    ],
    (3, "Hindi") => &[
      "कबूतर और मधुमक्खी", "कौन", "मित्र", "नन्हीं चिड़िया", "सच्ची कहानी", "समय",
      "खेल", "हमारे त्योहार", "मेरे खिलौने", "इंद्रधनुष", "हमारा देश", "हम बच्चे",
    ],
    (3, "Sanskrit") => &[
      "सुप्रभातम्", "उद्यानकथा", "पक्षिणां संवादः", "निनायाः कथा", "क्रमेण", "समुद्रगीतम्",
      "फेनिलफलः", "यानानि", "श्वानकथा", "मरुभूमिः", "भारत", "क्रीडाः",
    ],
    (3, "Urdu") => &[
      "صبح بخیر", "جادو باغ", "پرندوں کی بات", "نینا اور چڑیا", "آہستہ آہستہ", "سمندر کا گیت",
      "غبارہ بیچنے والا", "ریل گاڑی", "میں اور کتا", "صحرائی جہاز", "ہندوستان", "کھیلیں",
    ],
    (3, "Science") => &[
      "Living and Non-Living Things", "Parts of a Plant", "Birds and Their Beaks", "Animals and Their Food",
      "Housing and Clothing", "Safety and First Aid", "Air, Water and Weather", "Earth and Its Neighbors",
      "Our Environment", "Soil", "Work of a Computer", "Light and Shadow",
    ],
    (3, "Social Studies (SST)") => &[
      "Our Community", "Local Government", "Directions and Maps", "Transport and Communication",
      "Early Humans", "Our Country India", "States and Capitals", "Culture and Festivals", "Our Heroes",
      "The Earth and Continents", "Natural Resources", "Save Water",
    ],
    (3, "Mathematics") => &[
      "Where to Look From", "Fun with Numbers", "Give and Take", "Long and Short", "Shapes and Designs",
      "Fun with Give and Take", "Time Goes On", "Who is Heavier?", "How Many Times?", "Play with Patterns",
      "Jugs and Mugs", "Can We Share?", "Smart Charts!", "Rupees and Paise",
    ],

    (4, "English") => &[
      "Wake Up!", "Neha’s Alarm", "Noses", "Run!", "Why?", "Don’t be Afraid", "Alice in Wonderland",
      "Hellen Keller", "The Donkey", "The Milkman’s Cow", "Pinocchio", "Unity",
    ],
    (4, "Hindi") => &[
      "जागो", "नीहा की घड़ी", "नाक", "दौड़", "क्यों?", "डरो मत", "एलिस", "हेलेन केलर",
      "गधा", "दूधवाला", "पिनोचियो", "एकता",
    ],
    (4, "Sanskrit") => &[
      "उत्तिष्ठ", "नेहायाः घण्टा", "नासा", "धाव", "कुतः?", "मा भैः", "आलिसकथा", "हेलेनकेलर",
      "गर्दभः", "दुग्धविक्रेता", "पिनोच्चियो", "एकता",
    ],
    (4, "Urdu") => &[
      "جاگو", "نیہا کی گھڑی", "ناک", "دوڑ", "کیوں؟", "ڈرو مت", "ایلس", "ہیلیں کیلار",
      "گدھا", "دودھ والا", "پینوکیو", "یکجہتی",
    ],
    (4, "Science") => &[
      "Plant Life", "Animal Life", "Adaptations", "Food and Digestion", "Teeth and Microbes",
      "Safety First", "Air and Water", "Earth, Sun, Moon", "Force, Work and Energy",
      "Matter and Materials", "Light and Sound", "Our Environment",
    ],
    (4, "Social Studies (SST)") => &[
      "Family and Relationships", "Society and Community", "Local Government", "States and Capitals",
      "Physical Features of India", "Climate and Weather", "Agriculture", "Industries", "Transport",
      "Communication", "Natural Resources", "Our Heritage",
    ],
    (4, "Mathematics") => &[
      "Building with Bricks", "Long and Short", "A Trip to Bhopal", "Tick-Tick-Tick",
      "The Way the World Looks", "The Junk Seller", "Jugs and Mugs", "Carts and Wheels",
      "Halves and Quarters", "Play with Patterns", "Tables and Shares", "How Heavy? How Light?",
      "Fields and Fences", "Smarts Charts",
    ],

    (5, "English") => &[
      "Ice‑Cream Man", "Teamwork", "Flying Together", "My Shadow", "Robinson Crusoe", "Cry‑Baby",
      "Around the World", "Malala", "Wonderful Waste", "Seeds and Plants", "Art of Paper", "Sunita",
    ],
    (5, "Hindi") => &[
      "आइसक्रीम वाला", "टीमवर्क", "साथ-साथ", "मेरी छाया", "रॉबिन्सन क्रूसो", "रोना",
      "दुनिया का चक्कर", "मलाला", "कमाल का कचरा", "बीज", "कागज़ कला", "सुनीता",
    ],
    (5, "Sanskrit") => &[
      "हिमशीतलः", "समूहकार्य", "एकत्र", "मम छाया", "रॉबिन्सनकथा", "रोदनम्",
      "विश्वभ्रमणम्", "मलाला", "आश्चर्यजनकः", "बीजानि", "पत्रकला", "सुनीता",
    ],
    (5, "Urdu") => &[
      "آئس کریم والا", "ٹیم ورک", "اکٹھے", "میری پرچھائیں", "روبنسن کروسو", "رونا",
      "دنیا کا چکر", "ملالہ", "زبردست کچرا", "بیج", "پیپر آرٹ", "سونیتا",
    ],
    (5, "Science") => &[
      "Growing Plants", "Animals and Their Surroundings", "Food and Health", "Safety and First Aid",
      "Housing and Clothing", "Air and Water", "Rocks and Minerals", "Soil Erosion", "Light and Shadow",
      "Force and Energy", "Simple Machines", "The Moon and Stars",
    ],
    (5, "Social Studies (SST)") => &[
      "Globe and Maps", "Latitudes and Longitudes", "India – Location and Extent", "Physical Divisions",
      "Climate", "Natural Vegetation", "Minerals and Industries", "Transport", "Communication",
      "Government", "Civic Rights", "UN and Cooperation",
    ],
    (5, "Mathematics") => &[
      "The Fish Tale", "Shapes and Angles", "How Many Squares?", "Parts and Wholes",
      "Does It Look the Same?", "Be My Multiple, I'll be Your Factor", "Can You See the Pattern?",
      "Mapping Your Way", "Boxes and Sketches", "Tenths and Hundredths", "Area and Its Boundary",
      "Smart Charts", "Ways to Multiply and Divide", "How Big? How Heavy?",
    ],

    (6, "Science") => &[
      "Food: Where Does It Come From?", "Components of Food", "Fibre to Fabric", "Sorting Materials",
      "Separation of Substances", "Changes Around Us", "Getting to Know Plants", "Body Movements",
      "Living Organisms and Their Surroundings", "Motion and Measurement", "Light, Shadows and Reflections",
      "Electricity and Circuits",
    ],
    (6, "English") => &[
      "Who Did Patrick’s Homework?", "How the Dog Found Himself", "Taro’s Reward",
      "An Indian-American Woman in Space", "Beauty", "Where Do All the Teachers Go?",
      "A Different Kind of School", "The Quarrel", "An Apple Tree", "The Kite", "A Pact with the Sun",
      "Desert Animals",
    ],
    (6, "Social Studies (SST)") => &[
      "What, Where, How and When?", "On the Trail of the Earliest People", "From Gathering to Growing Food",
      "In the Earliest Cities", "What Books and Burials Tell Us", "Kingdoms, Kings and an Early Republic",
      "New Questions and Ideas", "Ashoka, The Emperor Who Gave Up War", "Vital Villages, Thriving Towns",
      "Traders, Kings and Pilgrims", "New Empires and Kingdoms", "Buildings, Paintings and Books",
    ],
    (6, "Hindi") => &[
      "वह चिड़िया जो", "जैकल", "निन्का प्यो", "बस की सैर", "मछली जल की रानी", "टीस",
      "ईदगाह", "झाँसी की रानी", "भारत माता", "विज्ञान के चमत्कार", "हमारे त्योहार", "खेल-कूद",
    ],
    (6, "Sanskrit") => &[
      "सुभाषितानि", "मित्रं शरणम्", "क्रीडास्पर्धा", "गुरु सम्मान", "विद्यालयः", "वसन्तऋतुः",
      "स्वास्थ्यं महत्तरं धनम्", "वृक्षाः", "मातृभूमिः", "नदी", "पर्वतः", "विश्वविद्यालयः",
    ],
    (6, "Urdu") => &URDU_LESSONS,
    (6, "Mathematics") => &[
      "Knowing Our Numbers", "Whole Numbers", "Playing with Numbers", "Basic Geometrical Ideas",
      "Understanding Elementary Shapes", "Integers", "Fractions", "Decimals", "Data Handling",
      "Mensuration", "Algebra", "Ratio and Proportion", "Symmetry", "Practical Geometry",
    ],

    (7, "Science") => &[
      "Nutrition in Plants", "Nutrition in Animals", "Heat", "Acids, Bases and Salts",
      "Physical and Chemical Changes", "Weather, Climate", "Winds, Storms and Cyclones", "Soil",
      "Respiration in Organisms", "Transportation in Animals and Plants", "Reproduction in Plants",
      "Motion and Time",
    ],
    (7, "English") => &[
      "Three Questions", "A Gift of Chappals", "Gopal and the Hilsa Fish",
      "The Ashes that Made Trees Bloom", "Quality", "Expert Detectives", "The Invention of Vita‑Wonk",
      "Fire: Friend and Foe", "A Bicycle in Good Repair", "The Story of Cricket", "Poems", "Supplementary",
    ],
    (7, "Social Studies (SST)") => &[
      "Tracing Changes Through a Thousand Years", "New Kings and Kingdoms", "Delhi: 12th to 15th Century",
      "The Mughal Empire", "Rulers and Buildings", "Towns, Traders and Craftspersons",
      "Tribes, Nomads and Settled Communities", "Devotional Paths", "The Making of Regional Cultures",
      "Eighteenth‑Century Political Formations", "Environment", "Economics",
    ],
    (7, "Hindi") => &[
      "हम भारतवासी", "गलता लोहा", "नीलकंठ", "कठिनाई का सामना", "रहीम के दोहे", "आसमान",
      "नाटक अंश", "कविता", "विज्ञान", "प्रयास", "यात्रा", "पर्यावरण",
    ],
    (7, "Sanskrit") => &[
      "पठामः", "संवादः", "कविता", "नीतिः", "विद्याः", "पर्यावरणम्",
      "विज्ञानम्", "भारतवृत्तान्तः", "नाटकभागः", "इतिहासः", "समाजः", "आर्थिकी",
    ],
    (7, "Urdu") => &URDU_LESSONS,
    (7, "Mathematics") => &[
      "Integers", "Fractions and Decimals", "Data Handling", "Simple Equations", "Lines and Angles",
      "The Triangle and Its Properties", "Congruence of Triangles", "Comparing Quantities",
      "Rational Numbers", "Practical Geometry", "Perimeter and Area", "Algebraic Expressions",
      "Exponents and Powers", "Symmetry", "Visualising Solid Shapes",
    ],

    (8, "Science") => &[
      "Crop Production", "Microorganisms", "Synthetic Fibres and Plastics",
      "Materials: Metals and Non‑Metals", "Coal and Petroleum", "Combustion and Flame",
      "Conservation of Plants and Animals", "Cell – Structure and Functions", "Reproduction in Animals",
      "Reaching the Age of Adolescence", "Force and Pressure", "Friction",
    ],
    (8, "English") => &[
      "The Best Christmas Present", "The Tsunami", "Glimpses of the Past",
      "Bepin Choudhury’s Lapse of Memory", "The Summit Within", "This is Jody’s Fawn",
      "A Short Monsoon Diary", "The Great Stone Face", "Poems", "Supplementary", "Diary", "Speeches",
    ],
    (8, "Social Studies (SST)") => &[
      "Resources", "Land, Soil, Water, Natural Vegetation", "Mineral and Power Resources", "Agriculture",
      "Industries", "Human Resources", "Constitution and Secularism", "Parliament and Law", "Judiciary",
      "Social Justice", "Economic Activities", "Public Facilities",
    ],
    (8, "Hindi") => &HINDI_LESSONS,
    (8, "Sanskrit") => &SANSKRIT_LESSONS,
    (8, "Urdu") => &URDU_LESSONS,
    (8, "Mathematics") => &[
      "Rational Numbers", "Linear Equations in One Variable", "Understanding Quadrilaterals",
      "Practical Geometry", "Data Handling", "Squares and Square Roots", "Cubes and Cube Roots",
      "Comparing Quantities", "Algebraic Expressions and Identities", "Visualising Solid Shapes",
      "Mensuration", "Exponents and Powers", "Direct and Inverse Proportions",
    ],

    (9, "Science") => &[
      "Matter in Our Surroundings", "Is Matter Around Us Pure?", "Atoms and Molecules",
      "Structure of the Atom", "The Fundamental Unit of Life", "Tissues", "Motion",
      "Force and Laws of Motion", "Gravitation", "Work and Energy", "Sound",
      "Improvement in Food Resources",
    ],
    (9, "English") => &[
      "The Fun They Had", "The Sound of Music", "The Little Girl", "A Truly Beautiful Mind",
      "The Snake and the Mirror", "My Childhood", "Packing", "Reach for the Top", "The Bond of Love",
      "Kathmandu", "If I Were You", "Poems",
    ],
    (9, "Social Studies (SST)") => &[
      "The French Revolution", "Socialism in Europe", "Nazism and the Rise of Hitler", "Forest Society",
      "Pastoralists", "India – Size and Location", "Physical Features of India", "Drainage", "Climate",
      "Natural Vegetation and Wildlife", "Population", "Democracy in the Contemporary World",
    ],
    (9, "Hindi") => &HINDI_LESSONS,
    (9, "Sanskrit") => &SANSKRIT_LESSONS,
    (9, "Urdu") => &URDU_LESSONS,
    (9, "Mathematics") => &[
      "Number Systems", "Polynomials", "Coordinate Geometry", "Linear Equations in Two Variables",
      "Introduction to Euclid’s Geometry", "Lines and Angles", "Triangles", "Quadrilaterals",
      "Areas of Parallelograms and Triangles", "Circles", "Constructions", "Heron’s Formula",
      "Surface Areas and Volumes", "Statistics", "Probability",
    ],

    (10, "Science") => &[
      "Chemical Reactions and Equations", "Acids, Bases and Salts", "Metals and Non-metals",
      "Carbon and its Compounds", "Periodic Classification", "Life Processes", "Control and Coordination",
      "How do Organisms Reproduce?", "Heredity and Evolution", "Light – Reflection and Refraction",
      "The Human Eye and the Colourful World", "Electricity",
    ],
    (10, "English") => &[
      "A Letter to God", "Nelson Mandela", "Two Stories about Flying", "From the Diary of Anne Frank",
      "Glimpses of India", "Mijbil the Otter", "Madam Rides the Bus", "The Sermon at Benares",
      "The Proposal", "Dust of Snow", "The Ball Poem", "Animals",
    ],
    (10, "Social Studies (SST)") => &[
      "The Rise of Nationalism in Europe", "Nationalism in India", "The Making of a Global World",
      "The Age of Industrialisation", "Print Culture and the Modern World", "Resources and Development",
      "Forest and Wildlife Resources", "Water Resources", "Agriculture", "Minerals and Energy Resources",
      "Manufacturing Industries", "Life Lines of National Economy",
    ],
    (10, "Hindi") => &[
      "साखियाँ", "सूरदास के पद", "लोकोक्ति", "बड़े भाई साहब", "डायरी के पन्ने", "मनुष्यता",
      "गिल्लू", "लखनवी अंडा", "साखी", "अंतिम दिन", "उपन्यास अंश", "यात्री",
    ],
    (10, "Sanskrit") => &[
      "शुचिता", "सुभाषितानि", "सुगन्धः", "अहं छात्रः", "भारतमाता", "संस्कृतसाहित्ये",
      "नदी", "वनम्", "कविता", "शिक्षा", "आरोग्यम्", "विद्याधनम्",
    ],
    (10, "Urdu") => &URDU_LESSONS,
    (10, "Mathematics") => &[
      "Real Numbers", "Polynomials", "Pair of Linear Equations in Two Variables", "Quadratic Equations",
      "Arithmetic Progressions", "Triangles", "Coordinate Geometry", "Introduction to Trigonometry",
      "Applications of Trigonometry", "Circles", "Constructions", "Areas Related to Circles",
      "Surface Areas and Volumes", "Statistics", "Probability",
    ],

    (11, "Science") => &[
      "Physical World", "Units and Measurements", "Motion in a Straight Line", "Motion in a Plane",
      "Laws of Motion", "Work, Energy and Power", "System of Particles and Rigid Body", "Gravitation",
      "Mechanical Properties of Solids", "Mechanical Properties of Fluids", "Thermal Properties of Matter",
      "Thermodynamics",
    ],
    (11, "English") => &[
      "The Portrait of a Lady", "We’re Not Afraid", "Discovering Tut", "The Ailing Planet",
      "The Browning Version", "Mother’s Day", "Birth", "Poems", "Debates", "Reading Skills",
      "Writing Skills", "Listening Skills",
    ],
    (11, "Social Studies (SST)") => &[
      "Indian Constitution at Work", "Political Theory", "Indian Economic Development",
      "Statistics for Economics", "Geography – Fundamentals", "India – Physical Environment", "Culture",
      "Society", "Social Change", "Globalisation", "Environment", "Field Work",
    ],
    (11, "Hindi") => &HINDI_LESSONS,
    (11, "Sanskrit") => &SANSKRIT_LESSONS,
    (11, "Urdu") => &URDU_LESSONS,
    (11, "Mathematics") => &[
      "Sets", "Relations and Functions", "Trigonometric Functions", "Principle of Mathematical Induction",
      "Complex Numbers and Quadratic Equations", "Linear Inequalities", "Permutations and Combinations",
      "Binomial Theorem", "Sequences and Series", "Straight Lines", "Conic Sections",
      "Introduction to Three-dimensional Geometry", "Limits and Derivatives", "Statistics", "Probability",
    ],

    (12, "Science") => &[
      "Reproduction in Organisms", "Genetics and Evolution", "Biology in Human Welfare", "Biotechnology",
      "Ecology and Environment", "Human Health and Disease", "Evolution", "Microbes in Human Welfare",
      "Reproductive Health", "Molecular Basis of Inheritance", "Principles of Inheritance", "Ecosystem",
    ],
    (12, "English") => &[
      "The Last Lesson", "Lost Spring", "Deep Water", "The Rattrap", "Indigo", "Poets and Pancakes",
      "The Interview", "Going Places", "My Mother at Sixty-Six", "A Thing of Beauty",
      "Aunt Jennifer’s Tigers", "An Elementary School Classroom",
    ],
    (12, "Social Studies (SST)") => &[
      "Politics in India Since Independence", "Globalisation", "Human Geography",
      "Contemporary World Politics", "Indian Society", "Social Change and Development", "Macroeconomics",
      "Microeconomics", "Indian Economic Development", "Population", "Urbanisation",
      "Environment and Sustainable Development",
    ],
    (12, "Hindi") => &[
      "आत्मकथा", "यात्रा-वृत्तांत", "काव्य खंड", "गद्य खंड", "निबंध", "लेख",
      "समालोचना", "रचना-कौशल", "काव्यांग", "विज्ञान लेखन", "वृत्तांत", "रिपोर्ट",
    ],
    (12, "Sanskrit") => &[
      "पद्यभागः", "गद्यभागः", "नाटकभागः", "व्याकरणम्", "अलंकाराः", "समासाः",
      "विप्रतिषेधः", "शब्दरूपाणि", "धातुरूपाणि", "निबन्धः", "काव्यविशेषाः", "नाट्यशास्त्रम्",
    ],
    (12, "Urdu") => &URDU_LESSONS,
    (12, "Mathematics") => &[
      "Relations and Functions", "Inverse Trigonometric Functions", "Matrices", "Determinants",
      "Continuity and Differentiability", "Applications of Derivatives", "Integrals",
      "Applications of Integrals", "Differential Equations", "Vector Algebra",
      "Three-dimensional Geometry", "Linear Programming", "Probability",
    ],

    _ => return None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn curated_pairs_have_at_least_twelve_chapters() {
    for class in 1..=12u8 {
      for subject in ["English", "Science", "Mathematics", "Social Studies (SST)", "Hindi", "Sanskrit", "Urdu"] {
        if curated(class, subject).is_some() {
          let got = chapters_for(class, subject, None);
          assert!(got.len() >= MIN_CHAPTERS, "class {} {} has only {} chapters", class, subject, got.len());
        }
      }
    }
  }

  #[test]
  fn resolver_is_deterministic() {
    let a = chapters_for(10, "Science", None);
    let b = chapters_for(10, "Science", None);
    assert_eq!(a, b);
    assert_eq!(a[0], "Chemical Reactions and Equations");
  }

  #[test]
  fn unknown_pair_synthesizes_placeholders() {
    let got = chapters_for(4, "Robotics", None);
    assert_eq!(got.len(), MIN_CHAPTERS);
    assert_eq!(got[0], "Robotics Chapter 1");
    assert_eq!(got[11], "Robotics Chapter 12");
  }

  #[test]
  fn science_stream_takes_precedence_for_senior_classes() {
    let pcb = chapters_for(11, "Science", Some(Stream::Pcb));
    assert_eq!(pcb[0], "The Living World");
    let pcm = chapters_for(12, "Science", Some(Stream::Pcm));
    assert_eq!(pcm[0], "Electric Charges and Fields");
    // Without a stream the curated class table applies.
    let plain = chapters_for(11, "Science", None);
    assert_eq!(plain[0], "Physical World");
  }

  #[test]
  fn stream_ignored_below_class_eleven() {
    let got = chapters_for(9, "Science", Some(Stream::Pcb));
    assert_eq!(got[0], "Matter in Our Surroundings");
  }
}
