//! Data shipped with the crate: named organic reactions, the common-name formula
//! glossary, the compound structure dictionary, the reaction category registry
//! and the synthesis pathways of every category.
use super::categories::{CategoryRegistry, ReactionCategory};
use super::kb_api::KnowledgeBaseData;
use super::records::{CompoundEntry, PathwayRecord, ReactionRecord};

pub fn builtin_data() -> KnowledgeBaseData {
    KnowledgeBaseData {
        reactions: named_reactions(),
        compounds: compound_dictionary(),
        common_names: common_names(),
        categories: category_registry(),
        pathways: pathways(),
    }
}

fn reaction(
    name: &str,
    reactants: &str,
    products: &str,
    description: &str,
    mechanism: &str,
    year: i32,
    chemists: &[&str],
) -> ReactionRecord {
    ReactionRecord {
        name: name.to_string(),
        reactants: reactants.to_string(),
        products: products.to_string(),
        description: description.to_string(),
        mechanism: mechanism.to_string(),
        year,
        chemists: chemists.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn named_reactions() -> Vec<ReactionRecord> {
    vec![
        reaction(
            "Arndt-Eistert Reaction",
            "RCOOH + CH₂N₂",
            "RCH₂COOH",
            "Homologation of carboxylic acids via diazomethane and Wolff rearrangement",
            "Diazoketone formation, Wolff rearrangement",
            1935,
            &["Fritz Arndt", "Bernd Eistert"],
        ),
        reaction(
            "Hofmann Degradation",
            "RCONH₂ + Br₂ + NaOH",
            "RNH₂ + CO₂",
            "Conversion of primary amides to primary amines with loss of one carbon atom",
            "Hypobromite intermediate, isocyanate formation",
            1881,
            &["August Wilhelm von Hofmann"],
        ),
        reaction(
            "Pinacol Reduction",
            "2 R₂C=O",
            "R₂C(OH)C(OH)R₂",
            "Reductive coupling of carbonyl compounds to form 1,2-diols",
            "Single electron transfer, radical coupling",
            1859,
            &["Rudolph Fittig"],
        ),
        reaction(
            "Pinacol-Pinacolone Rearrangement",
            "R₂C(OH)C(OH)R₂",
            "R₂C(O)CR₂",
            "Acid-catalyzed rearrangement of 1,2-diols to carbonyl compounds",
            "Carbocation rearrangement",
            1860,
            &["Rudolph Fittig"],
        ),
        reaction(
            "Pfitzer Reaction",
            "R₂C(OH)CH₂R'",
            "R₂C=CR'",
            "Dehydration of tertiary alcohols to alkenes",
            "E1 elimination",
            1892,
            &["Wilhelm Pfitzer"],
        ),
        reaction(
            "Paal-Knorr Synthesis",
            "1,4-dicarbonyl compound + NH₃ or amine",
            "pyrrole or substituted pyrrole",
            "Formation of pyrroles from 1,4-dicarbonyl compounds and ammonia or primary amines",
            "Condensation and cyclization",
            1885,
            &["Carl Paal", "Ludwig Knorr"],
        ),
        reaction(
            "Oppenauer Oxidation",
            "RCH₂OH + (CH₃)₂C=O",
            "RCHO + (CH₃)₂CHOH",
            "Oxidation of secondary alcohols to ketones using aluminum isopropoxide",
            "Hydride transfer",
            1937,
            &["Rupert Viktor Oppenauer"],
        ),
        reaction(
            "Orton Rearrangement",
            "ArNClCOR",
            "ClArNHCOR",
            "Rearrangement of N-chloroacyl anilines to chloro anilides",
            "Ion pair dissociation/recombination",
            1899,
            &["Kennedy Joseph Orton"],
        ),
        reaction(
            "Meerwein-Ponndorf-Verley Reduction",
            "R₂C=O + (CH₃)₂CHOH",
            "R₂CHOH + (CH₃)₂C=O",
            "Reduction of ketones to secondary alcohols using aluminum isopropoxide",
            "Hydride transfer via aluminum alkoxide",
            1925,
            &["Hans Meerwein", "Wolfgang Ponndorf", "Albert Verley"],
        ),
        reaction(
            "Meerwein Reaction",
            "ArN₂⁺ + CH₂=CHR",
            "ArCH₂CH₂R",
            "Arylation of alkenes using arenediazonium salts",
            "Radical addition",
            1939,
            &["Hans Meerwein"],
        ),
        reaction(
            "Lossen Rearrangement",
            "RCONHOH",
            "RNCO",
            "Conversion of hydroxamic acids to isocyanates",
            "O-acylation, rearrangement",
            1872,
            &["Wilhelm Lossen"],
        ),
        reaction(
            "Lobry de Bruyn-van Ekenstein Rearrangement",
            "aldose",
            "ketose",
            "Base-catalyzed isomerization of aldoses to ketoses",
            "Enolization",
            1895,
            &[
                "Cornelis Adriaan Lobry van Troostenburg de Bruyn",
                "Willem Alberda van Ekenstein",
            ],
        ),
        reaction(
            "Leuckart Reaction",
            "R₂C=O + HCOONH₄",
            "R₂CHNH₂",
            "Reductive amination of carbonyl compounds using formamide or ammonium formate",
            "Iminium ion formation, reduction",
            1885,
            &["Rudolf Leuckart"],
        ),
        reaction(
            "Lederer-Manasse Reaction",
            "phenol + CH₂O",
            "o-HOC₆H₄CH₂OH",
            "Hydroxymethylation of phenols with formaldehyde",
            "Electrophilic aromatic substitution",
            1894,
            &["Lederer", "Manasse"],
        ),
        reaction(
            "Kolbe-Schmitt Synthesis",
            "phenol + CO₂",
            "salicylic acid",
            "Carboxylation of phenols to hydroxybenzoic acids",
            "Electrophilic aromatic substitution",
            1860,
            &["Adolph Wilhelm Hermann Kolbe", "Rudolf Schmitt"],
        ),
        reaction(
            "Kolbe Electrolytic Synthesis",
            "2 RCOO⁻",
            "R-R + 2 CO₂",
            "Electrochemical decarboxylative dimerization of carboxylates",
            "Radical formation and coupling",
            1849,
            &["Adolph Wilhelm Hermann Kolbe"],
        ),
        reaction(
            "Kiliani Reaction",
            "aldose + HCN",
            "higher aldose",
            "Chain elongation of aldoses via cyanohydrin formation and hydrolysis",
            "Cyanohydrin formation, hydrolysis, reduction",
            1886,
            &["Heinrich Kiliani"],
        ),
        reaction(
            "Hofmann Mustard Oil Reaction",
            "RNH₂ + CS₂",
            "RNCS",
            "Conversion of primary amines to isothiocyanates via dithiocarbamates",
            "Dithiocarbamate formation, decomposition",
            1868,
            &["August Wilhelm von Hofmann"],
        ),
        reaction(
            "Hofmann Exhaustive Methylation",
            "R₃N + CH₃I → R₄N⁺I⁻ → R₄N⁺OH⁻ → alkene",
            "alkene + trimethylamine",
            "Degradation of amines to alkenes via quaternary ammonium hydroxides",
            "Hofmann elimination",
            1851,
            &["August Wilhelm von Hofmann"],
        ),
        reaction(
            "Markovnikov's Rule",
            "asymmetric addition to alkenes",
            "rich get richer",
            "Prediction of regiochemistry in electrophilic additions to alkenes",
            "Carbocation stability",
            1870,
            &["Vladimir Markovnikov"],
        ),
        reaction(
            "Houben-Hoesch Synthesis",
            "ArH + RCN",
            "ArC(O)R",
            "Acylation of arenes with nitriles in the presence of Lewis acids",
            "Electrophilic aromatic substitution",
            1915,
            &["J. Houben", "K. Hoesch"],
        ),
        reaction(
            "Hunsdieker Reaction",
            "RCOOAg + Br2",
            "RBr + CO2 + AgBr",
            "Decarboxylative bromination of silver carboxylates",
            "Radical decarboxylation",
            1942,
            &["Heinrich Hunsdieker"],
        ),
        reaction(
            "Hoffmann-Martius Rearrangement",
            "C6H5NHR",
            "o/p-R-C6H4NH2",
            "Acid-catalyzed rearrangement of N-alkyl anilines to alkyl anilines",
            "Intramolecular electrophilic substitution",
            1868,
            &["August Wilhelm von Hofmann", "Carl Alexander Martius"],
        ),
    ]
}

/// common names of compound classes and reagents with their (generic) formulas
pub fn common_names() -> Vec<CompoundEntry> {
    [
        ("diazomethane", "CH2N2"),
        ("silver oxide", "Ag2O"),
        ("diketone", "RCOCOR"),
        ("diol", "R(OH)R(OH)"),
        ("sulfonyl chloride", "RSO2Cl"),
        ("quaternary ammonium", "R4N+ OH-"),
        ("hydroxylamine", "NH2OH"),
        ("oxime", "RR'C=NOH"),
        ("nitroso compound", "RNO"),
        ("formaldehyde", "HCHO"),
        ("formic acid", "HCOOH"),
        ("sodium cyanide", "NaCN"),
        ("phenol", "C6H5OH"),
        ("quinoline", "C9H7N"),
        ("nitro compound", "RNO2"),
        ("carboxylic acid", "RCOOH"),
        ("haloform", "CHX3"),
        ("alkene", "R2C=CR2"),
        ("aldehyde", "RCHO"),
        ("ketone", "RCOR'"),
        ("alkane", "RH"),
        ("amine", "RNH2"),
        ("isocyanate", "RNCO"),
        ("isothiocyanate", "RNCS"),
        ("amide", "RCONH2"),
        ("alcohol", "ROH"),
        ("alkyl halide", "RX"),
        ("aryl halide", "ArX"),
    ]
    .iter()
    .map(|(name, formula)| CompoundEntry::formula(name, formula))
    .collect()
}

/// compounds recognized in problem text, with SMILES
pub fn compound_dictionary() -> Vec<CompoundEntry> {
    [
        // alcohols
        ("benzyl alcohol", "c1ccccc1CO"),
        ("ethanol", "CCO"),
        ("methanol", "CO"),
        ("cyclohexanol", "OC1CCCCC1"),
        ("isopropanol", "CC(C)O"),
        // aldehydes
        ("benzaldehyde", "c1ccccc1C=O"),
        ("acetaldehyde", "CC=O"),
        ("formaldehyde", "C=O"),
        ("propionaldehyde", "CCC=O"),
        // carboxylic acids
        ("benzoic acid", "c1ccccc1C(=O)O"),
        ("acetic acid", "CC(=O)O"),
        ("formic acid", "OC=O"),
        ("propionic acid", "CCC(=O)O"),
        // ketones
        ("acetophenone", "CC(=O)c1ccccc1"),
        ("acetone", "CC(=O)C"),
        ("cyclohexanone", "O=C1CCCCC1"),
        ("butanone", "CCC(=O)C"),
        // aromatics
        ("toluene", "Cc1ccccc1"),
        ("benzene", "c1ccccc1"),
        ("phenol", "Oc1ccccc1"),
        ("aniline", "Nc1ccccc1"),
        ("nitrobenzene", "O=[N+]([O-])c1ccccc1"),
        ("bromobenzene", "Brc1ccccc1"),
        ("chlorobenzene", "Clc1ccccc1"),
        ("iodobenzene", "Ic1ccccc1"),
        ("anisole", "COc1ccccc1"),
        // esters and acyl derivatives
        ("methyl benzoate", "COC(=O)c1ccccc1"),
        ("ethyl acetate", "CCOC(=O)C"),
        ("acetanilide", "CC(=O)Nc1ccccc1"),
        ("acetyl chloride", "CC(=O)Cl"),
        ("acetic anhydride", "CC(=O)OC(=O)C"),
        // amines and amides
        ("methylamine", "CN"),
        ("dimethylamine", "CNC"),
        ("trimethylamine", "CN(C)C"),
        ("acetamide", "CC(=O)N"),
        // alkenes and alkanes
        ("ethylene", "C=C"),
        ("acetylene", "C#C"),
        ("cyclohexane", "C1CCCCC1"),
        ("hexane", "CCCCCC"),
    ]
    .iter()
    .map(|(name, smiles)| CompoundEntry::smiles(name, smiles))
    .collect()
}

pub fn category_registry() -> CategoryRegistry {
    CategoryRegistry::from_categories(vec![
        ReactionCategory::new("oxidation", &["oxid"]),
        ReactionCategory::new("reduction", &["reduc"]),
        ReactionCategory::new("esterification", &["esterif"]),
        ReactionCategory::new("hydrolysis", &["hydrolys"]),
        ReactionCategory::new("acetylation", &["acetylat"]),
        ReactionCategory::new("halogenation", &["halogenat", "bromin", "chlorin"]),
        ReactionCategory::new("nitration", &["nitrat"]),
        ReactionCategory::new("alkylation", &["alkylat"]),
        ReactionCategory::new("acylation", &["acylat"]),
        ReactionCategory::new("grignard", &["grignard"]),
    ])
}

pub fn pathways() -> Vec<PathwayRecord> {
    vec![
        // oxidation
        PathwayRecord::new(
            "oxidation",
            "Primary Alcohol Oxidation",
            "Primary alcohol → Aldehyde → Carboxylic acid",
            &["c1ccccc1CO", "c1ccccc1C=O", "c1ccccc1C(=O)O"],
            &["KMnO₄", "K₂Cr₂O₇/H₂SO₄", "Jones reagent"],
            "Stepwise oxidation via chromate ester intermediate",
        ),
        PathwayRecord::new(
            "oxidation",
            "Toluene Oxidation",
            "Alkyl benzene → Aldehyde → Carboxylic acid",
            &["Cc1ccccc1", "c1ccccc1C=O", "c1ccccc1C(=O)O"],
            &["KMnO₄", "Heat", "Co/Mn catalysts"],
            "Radical mechanism with benzylic hydrogen abstraction",
        ),
        PathwayRecord::new(
            "oxidation",
            "Alkene Oxidation",
            "Alkene → Ketone (Ozonolysis)",
            &["C=CC", "CC(=O)C"],
            &["O₃, then Zn/H₂O"],
            "Ozonolysis followed by reductive workup",
        ),
        // reduction
        PathwayRecord::new(
            "reduction",
            "Nitro Reduction",
            "Benzene → Nitrobenzene → Aniline",
            &["c1ccccc1", "O=[N+]([O-])c1ccccc1", "Nc1ccccc1"],
            &["HNO₃/H₂SO₄", "Sn/HCl", "Fe/HCl", "H₂/Pd"],
            "Electrophilic aromatic substitution followed by nitro reduction",
        ),
        PathwayRecord::new(
            "reduction",
            "Carbonyl Reduction",
            "Ketone → Secondary alcohol",
            &["CC(=O)c1ccccc1", "CC(O)c1ccccc1"],
            &["NaBH₄", "LiAlH₄"],
            "Nucleophilic addition of hydride ion",
        ),
        PathwayRecord::new(
            "reduction",
            "Carboxylic Acid Reduction",
            "Carboxylic acid → Primary alcohol",
            &["c1ccccc1C(=O)O", "c1ccccc1CO"],
            &["LiAlH₄", "BH₃"],
            "Nucleophilic acyl substitution followed by reduction",
        ),
        // esterification
        PathwayRecord::new(
            "esterification",
            "Fischer Esterification",
            "Carboxylic acid → Ester",
            &["c1ccccc1C(=O)O", "COC(=O)c1ccccc1"],
            &["CH₃OH/H₂SO₄", "Heat", "Acid catalyst"],
            "Nucleophilic acyl substitution with acid catalysis",
        ),
        PathwayRecord::new(
            "esterification",
            "Acyl Chloride Route",
            "Acid → Acyl chloride → Ester",
            &["c1ccccc1C(=O)O", "CC(=O)Cl", "COC(=O)c1ccccc1"],
            &["SOCl₂", "CH₃OH"],
            "Conversion to acyl chloride followed by alcoholysis",
        ),
        // hydrolysis
        PathwayRecord::new(
            "hydrolysis",
            "Ester Hydrolysis",
            "Ester → Carboxylic acid",
            &["COC(=O)c1ccccc1", "c1ccccc1C(=O)O"],
            &["NaOH/H₂O", "H₃O⁺"],
            "Nucleophilic acyl substitution (basic or acidic)",
        ),
        PathwayRecord::new(
            "hydrolysis",
            "Amide Hydrolysis",
            "Amide → Amine + Carboxylic acid",
            &["CC(=O)Nc1ccccc1", "Nc1ccccc1", "CC(=O)O"],
            &["NaOH/H₂O", "H₃O⁺", "Heat"],
            "Nucleophilic acyl substitution under vigorous conditions",
        ),
        // acetylation
        PathwayRecord::new(
            "acetylation",
            "Amine Acetylation",
            "Amine → Amide",
            &["Nc1ccccc1", "CC(=O)Nc1ccccc1"],
            &["Acetic anhydride", "Pyridine", "Acetyl chloride"],
            "Nucleophilic acyl substitution",
        ),
        PathwayRecord::new(
            "acetylation",
            "Alcohol Acetylation",
            "Alcohol → Ester",
            &["c1ccccc1CO", "COC(=O)c1ccccc1"],
            &["Acetic anhydride", "Acetyl chloride", "Pyridine"],
            "Nucleophilic acyl substitution",
        ),
        // halogenation
        PathwayRecord::new(
            "halogenation",
            "Aromatic Bromination",
            "Benzene → Bromobenzene",
            &["c1ccccc1", "Brc1ccccc1"],
            &["Br₂/FeBr₃"],
            "Electrophilic aromatic substitution",
        ),
        PathwayRecord::new(
            "halogenation",
            "Alkene Bromination",
            "Alkene → Dibromide",
            &["C=CC", "CC(Br)CBr"],
            &["Br₂/CCl₄"],
            "Electrophilic addition via bromonium ion",
        ),
        PathwayRecord::new(
            "halogenation",
            "Free Radical Bromination",
            "Alkane → Alkyl bromide",
            &["CCCC", "CCC(C)Br"],
            &["Br₂/hv"],
            "Free radical chain reaction",
        ),
        // nitration
        PathwayRecord::new(
            "nitration",
            "Aromatic Nitration",
            "Benzene → Nitrobenzene",
            &["c1ccccc1", "O=[N+]([O-])c1ccccc1"],
            &["HNO₃/H₂SO₄"],
            "Electrophilic aromatic substitution via nitronium ion",
        ),
        // alkylation
        PathwayRecord::new(
            "alkylation",
            "Friedel-Crafts Alkylation",
            "Benzene → Alkylbenzene",
            &["c1ccccc1", "CCc1ccccc1"],
            &["CH₃CH₂Cl/AlCl₃"],
            "Electrophilic aromatic substitution via carbocation",
        ),
        // acylation
        PathwayRecord::new(
            "acylation",
            "Friedel-Crafts Acylation",
            "Benzene → Ketone",
            &["c1ccccc1", "CC(=O)c1ccccc1"],
            &["CH₃COCl/AlCl₃"],
            "Electrophilic aromatic substitution via acylium ion",
        ),
        // grignard
        PathwayRecord::new(
            "grignard",
            "Grignard with Carbonyl",
            "Aryl halide → Grignard → Alcohol",
            &["Brc1ccccc1", "C=O", "COc1ccccc1"],
            &["Mg/ether", "HCHO", "H₃O⁺"],
            "Formation of Grignard reagent followed by nucleophilic addition",
        ),
    ]
}

/// worked problems offered by the front end: (title, problem text)
pub fn example_problems() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Oxidation Example",
            "Compound A on oxidation gives Compound B which on further oxidation gives compound C, benzoic acid.",
        ),
        (
            "Reduction Example",
            "Benzene on nitration gives Compound A which on reduction gives Compound B, aniline.",
        ),
        (
            "Esterification Example",
            "Benzoic acid undergoes esterification with methanol to give Compound A.",
        ),
        (
            "Acetylation Example",
            "Aniline undergoes acetylation to give Compound A.",
        ),
        (
            "Multi-step Synthesis",
            "Benzene is first acylated to Compound A, which is then reduced to Compound B.",
        ),
        (
            "Grignard Reaction",
            "Bromobenzene reacts with formaldehyde via Grignard reaction to give Compound A.",
        ),
    ]
}
