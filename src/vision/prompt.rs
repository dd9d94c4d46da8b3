// Fixed timetable extraction prompt
// Author: kelexine (https://github.com/kelexine)

/// Instruction sent ahead of every image.
///
/// The text is part of the wire contract with the client app, which parses
/// the model output as a JSON array of `{day, start, end}` objects where
/// `day` is a Korean weekday label and times are fractional 24-hour values.
/// Keep it byte-for-byte stable, leading newline and indentation included.
pub const TIMETABLE_PROMPT: &str = concat!(
    "\n",
    "    You are an expert at analyzing university timetables from the 'Everytime' app.\n",
    "    Analyze the provided image. Identify all the class blocks.\n",
    "    For each class, determine the day of the week and its start and end times.\n",
    "    The grid starts at 9 AM at the top. Each major grid line represents one hour. A class spanning one and a half grid cells is a 1.5-hour class.\n",
    "    Provide the output ONLY as a clean JSON array of objects, without any markdown formatting like ```json.\n",
    "    Each object must have three keys:\n",
    "    1. \"day\": string, one of '월', '화', '수', '목', '금'.\n",
    "    2. \"start\": number, the start time in 24-hour format (e.g., 13.5 for 1:30 PM).\n",
    "    3. \"end\": number, the end time in 24-hour format (e.g., 15.0 for 3:00 PM).\n",
    "    ",
);
