use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct OsmNode {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OsmWay {
    pub id: u64,
    pub node_ids: Vec<u64>,
    pub tags: HashMap<String, String>,
}

impl OsmWay {
    pub fn is_one_way(&self) -> bool {
        self.tags.get("oneway").map_or(false, |one_way| one_way == "yes") || self.is_roundabout()
    }

    pub fn is_roundabout(&self) -> bool {
        self.tags
            .get("junction")
            .map_or(false, |junction| junction == "roundabout")
    }
}
